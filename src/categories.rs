//! Typed helpers for the bundled categories.

use crate::generator::Generator;

/// Join the non-empty parts with single spaces.
pub fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Generator {
    pub fn first_name(&self) -> String {
        self.sample("first_names")
    }

    pub fn last_name(&self) -> String {
        self.sample("last_names")
    }

    /// First and last name; either part is skipped if unavailable.
    pub fn full_name(&self) -> String {
        join(&[self.first_name(), self.last_name()])
    }

    pub fn city(&self) -> String {
        self.sample("cities")
    }

    /// Building number followed by a street name.
    pub fn street_address(&self) -> String {
        join(&[self.generate("building_number"), self.sample("streets")])
    }

    pub fn zip(&self) -> String {
        self.generate("zip")
    }

    pub fn phone(&self) -> String {
        self.generate("phone")
    }

    pub fn color(&self) -> String {
        self.sample("colors")
    }

    pub fn company(&self) -> String {
        self.sample("companies")
    }
}

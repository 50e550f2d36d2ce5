use super::USER_PACKAGE;
use super::types::{Skin, SkinRegistry};
use crate::error::{Error, Result};

impl SkinRegistry {
    /// What: Exact lookup of a skin by owning package and name.
    ///
    /// Inputs:
    /// - `package`: Owning package name.
    /// - `name`: Skin name within that package.
    ///
    /// Output:
    /// - The matching skin, or [`Error::SkinNotFound`].
    pub fn find(&self, package: &str, name: &str) -> Result<&Skin> {
        self.skins
            .iter()
            .find(|s| s.package == package && s.name == name)
            .ok_or_else(|| Error::SkinNotFound {
                package: package.to_string(),
                name: name.to_string(),
            })
    }

    /// All skins of one package, sorted by name.
    #[must_use]
    pub fn in_package(&self, package: &str) -> Vec<&Skin> {
        let mut out: Vec<&Skin> = self
            .skins
            .iter()
            .filter(|s| s.package == package)
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// What: All skins in display order.
    ///
    /// Inputs: none.
    ///
    /// Output:
    /// - User-package skins first (sorted by name), then the remaining
    ///   skins sorted by (package, name).
    ///
    /// Details:
    /// - Uniqueness is only guaranteed per package; same-named skins from
    ///   different packages stay distinct entries here.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Skin> {
        let mut user: Vec<&Skin> = Vec::new();
        let mut rest: Vec<&Skin> = Vec::new();
        for skin in &self.skins {
            if skin.package == USER_PACKAGE {
                user.push(skin);
            } else {
                rest.push(skin);
            }
        }
        user.sort_by(|a, b| a.name.cmp(&b.name));
        rest.sort_by(|a, b| (&a.package, &a.name).cmp(&(&b.package, &b.name)));
        user.extend(rest);
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skins::{PREFERENCES, SkinTargets, TargetSettings};
    use serde_json::json;

    fn skin(package: &str, name: &str) -> Skin {
        let mut prefs = TargetSettings::new();
        prefs.insert("theme".to_string(), json!("t"));
        prefs.insert("color_scheme".to_string(), json!("c"));
        let mut targets = SkinTargets::new();
        targets.insert(PREFERENCES.to_string(), prefs);
        Skin {
            package: package.to_string(),
            name: name.to_string(),
            targets,
        }
    }

    fn registry() -> SkinRegistry {
        SkinRegistry {
            skins: vec![
                skin("Zebra", "Stripes"),
                skin("Nordic", "Nord"),
                skin("User", "Nord"),
                skin("User", "Daylight"),
            ],
        }
    }

    #[test]
    fn find_exact_or_not_found() {
        let reg = registry();
        assert_eq!(reg.find("Nordic", "Nord").expect("present").package, "Nordic");
        let err = reg.find("Nordic", "Absent").expect_err("absent");
        assert!(matches!(err, Error::SkinNotFound { .. }));
    }

    #[test]
    fn in_package_sorted_by_name() {
        let reg = registry();
        let names: Vec<&str> = reg.in_package("User").iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Daylight", "Nord"]);
        assert!(reg.in_package("Missing").is_empty());
    }

    #[test]
    fn ordered_puts_user_first_then_package_name() {
        let reg = registry();
        let ids: Vec<String> = reg.ordered().iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["User/Daylight", "User/Nord", "Nordic/Nord", "Zebra/Stripes"]
        );
    }

    #[test]
    fn same_name_across_packages_stays_distinct() {
        let reg = registry();
        let nords = reg
            .ordered()
            .iter()
            .filter(|s| s.name == "Nord")
            .count();
        assert_eq!(nords, 2);
    }
}

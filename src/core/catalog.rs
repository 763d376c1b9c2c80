use crate::domain::model::{CompanyInfo, GuideEntry, LevelEntry, Price, TourEntry, TO_BE_DETERMINED};
use crate::utils::error::{ContactError, Result};
use std::collections::BTreeMap;

/// Tour id whose guide answers any inquiry about an unknown tour.
pub const DEFAULT_GUIDE_ID: &str = "personalizado";

/// Read-only lookup tables for tours, levels and guides.
///
/// Lookups never fail: unknown tour or level ids display as the raw id and
/// unknown tours are routed to the fallback guide.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    company: CompanyInfo,
    tours: BTreeMap<String, TourEntry>,
    levels: BTreeMap<String, LevelEntry>,
    guides: BTreeMap<String, GuideEntry>,
    fallback_guide: GuideEntry,
}

impl Catalog {
    pub fn new(
        company: CompanyInfo,
        tours: BTreeMap<String, TourEntry>,
        levels: BTreeMap<String, LevelEntry>,
        guides: BTreeMap<String, GuideEntry>,
        default_guide: &str,
    ) -> Result<Self> {
        let fallback_guide = guides
            .get(default_guide)
            .cloned()
            .ok_or_else(|| ContactError::MissingConfigError {
                field: format!("guides.{}", default_guide),
            })?;

        Ok(Self {
            company,
            tours,
            levels,
            guides,
            fallback_guide,
        })
    }

    /// The tables the site ships with.
    pub fn builtin() -> Self {
        Self {
            company: builtin_company(),
            tours: builtin_tours(),
            levels: builtin_levels(),
            fallback_guide: builtin_guides()[DEFAULT_GUIDE_ID].clone(),
            guides: builtin_guides(),
        }
    }

    pub fn company(&self) -> &CompanyInfo {
        &self.company
    }

    pub fn tour(&self, id: &str) -> Option<&TourEntry> {
        self.tours.get(id)
    }

    pub fn tours(&self) -> &BTreeMap<String, TourEntry> {
        &self.tours
    }

    pub fn levels(&self) -> &BTreeMap<String, LevelEntry> {
        &self.levels
    }

    pub fn guides(&self) -> &BTreeMap<String, GuideEntry> {
        &self.guides
    }

    /// Display name of a tour, or the id itself when the tour is unknown.
    pub fn tour_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.tours.get(id).map(|t| t.name.as_str()).unwrap_or(id)
    }

    /// Display name of a riding level, or the id itself when unknown.
    pub fn level_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.levels.get(id).map(|l| l.name.as_str()).unwrap_or(id)
    }

    /// Guide assigned to a tour, falling back to the custom-tour guide.
    pub fn select_guide(&self, tour_id: &str) -> &GuideEntry {
        match self.guides.get(tour_id) {
            Some(guide) => guide,
            None => {
                tracing::debug!("No guide for tour '{}', using fallback guide", tour_id);
                &self.fallback_guide
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn builtin_company() -> CompanyInfo {
    CompanyInfo {
        name: "Velbrava".to_string(),
        website: "velobrava.com".to_string(),
        main_phone: "34663575346".to_string(),
        email: "info@velobrava.com".to_string(),
        location: "Costa Brava, Spain".to_string(),
    }
}

pub(crate) fn builtin_tours() -> BTreeMap<String, TourEntry> {
    let tour = |name: &str, price: Price, duration: &str, difficulty: &str| TourEntry {
        name: name.to_string(),
        price,
        duration: duration.to_string(),
        difficulty: difficulty.to_string(),
    };

    BTreeMap::from([
        (
            "costa-brava".to_string(),
            tour("Costa Brava Clasica", Price::Amount(65), "4-5 horas", "intermedio"),
        ),
        (
            "girona-pro".to_string(),
            tour("Girona Pro Ride", Price::Amount(85), "5-6 horas", "avanzado"),
        ),
        (
            "relax-gourmet".to_string(),
            tour("Relax + Gourmet", Price::Amount(55), "3-4 horas", "principiante"),
        ),
        (
            "personalizado".to_string(),
            tour(
                "Tour Personalizado",
                Price::ToBeDetermined,
                TO_BE_DETERMINED,
                TO_BE_DETERMINED,
            ),
        ),
    ])
}

pub(crate) fn builtin_levels() -> BTreeMap<String, LevelEntry> {
    let level = |name: &str, description: &str| LevelEntry {
        name: name.to_string(),
        description: description.to_string(),
    };

    BTreeMap::from([
        (
            "principiante".to_string(),
            level("Principiante (1-2h comodo)", "Rutas planas, ritmo relajado"),
        ),
        (
            "intermedio".to_string(),
            level("Intermedio (2-4h, algunas subidas)", "Rutas con desnivel moderado"),
        ),
        (
            "avanzado".to_string(),
            level("Avanzado (+4h, entreno regular)", "Rutas exigentes, buen nivel fisico"),
        ),
        (
            "competicion".to_string(),
            level("Competicion (rutas exigentes)", "Nivel profesional o semi-profesional"),
        ),
    ])
}

pub(crate) fn builtin_guides() -> BTreeMap<String, GuideEntry> {
    let guide = |name: &str, specialty: &str| GuideEntry {
        name: name.to_string(),
        phone: "34663575346".to_string(),
        specialty: specialty.to_string(),
        languages: vec![
            "español".to_string(),
            "catalan".to_string(),
            "frances".to_string(),
        ],
    };

    BTreeMap::from([
        ("costa-brava".to_string(), guide("Alejandro", "Rutas costeras y culturales")),
        ("girona-pro".to_string(), guide("Roger", "Rutas profesionales y competitivas")),
        ("relax-gourmet".to_string(), guide("Alejandro", "Experiencias gastronomicas")),
        ("personalizado".to_string(), guide("Alejandro", "Tour personalizado")),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_fall_back_to_raw_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tour_name("costa-brava"), "Costa Brava Clasica");
        assert_eq!(catalog.tour_name("montseny-gravel"), "montseny-gravel");
        assert_eq!(catalog.level_name("intermedio"), "Intermedio (2-4h, algunas subidas)");
        assert_eq!(catalog.level_name("experto"), "experto");
    }

    #[test]
    fn test_select_guide_falls_back_to_custom_tour_guide() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.select_guide("girona-pro").name, "Roger");

        let fallback = catalog.select_guide("does-not-exist");
        assert_eq!(fallback.specialty, "Tour personalizado");
    }

    #[test]
    fn test_new_requires_default_guide() {
        let result = Catalog::new(
            builtin_company(),
            builtin_tours(),
            builtin_levels(),
            BTreeMap::new(),
            DEFAULT_GUIDE_ID,
        );

        assert!(matches!(
            result,
            Err(ContactError::MissingConfigError { field }) if field == "guides.personalizado"
        ));
    }
}

//! Additional Cleaning Services Catalog
//!
//! The fixed menu a builder picks from when configuring an
//! additional-services field. Ids are stored in schemas and submissions;
//! names are what customers and owners see.

use serde::Serialize;

/// One entry of the additional-services menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// The full additional-services menu, in display order
pub const SERVICE_CATALOG: [ServiceOption; 13] = [
    ServiceOption { id: "refrigerator", name: "Refrigerator" },
    ServiceOption { id: "basement", name: "Basement" },
    ServiceOption { id: "oven", name: "Oven" },
    ServiceOption { id: "patio", name: "Patio" },
    ServiceOption { id: "dishes", name: "Dishes" },
    ServiceOption { id: "pet", name: "Pet Hair/Stains" },
    ServiceOption { id: "baseboard", name: "Baseboards" },
    ServiceOption { id: "garage", name: "Garage" },
    ServiceOption { id: "window", name: "Windows (Interior)" },
    ServiceOption { id: "dishwasher", name: "Dishwasher" },
    ServiceOption { id: "wall", name: "Walls" },
    ServiceOption { id: "cabinet", name: "Cabinets (Interior)" },
    ServiceOption { id: "washer-dryer", name: "Washer/Dryer" },
];

/// Resolve a service id to its display name
pub fn service_name(id: &str) -> Option<&'static str> {
    SERVICE_CATALOG.iter().find(|s| s.id == id).map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        assert_eq!(SERVICE_CATALOG.len(), 13);
        assert_eq!(SERVICE_CATALOG[0].id, "refrigerator");
        assert_eq!(SERVICE_CATALOG[12].id, "washer-dryer");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(service_name("pet"), Some("Pet Hair/Stains"));
        assert_eq!(service_name("window"), Some("Windows (Interior)"));
        assert_eq!(service_name("chimney"), None);
    }
}

//! Service catalog construction.
//!
//! Service definitions arrive grouped by processing type and then by name. The
//! catalog is the flat list of all of them, sorted by service name.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use flowadmin_common::model::catalog::{ParameterDescriptor, ServiceDescriptor};
use flowadmin_common::model::definition::{ServiceDefinition, ServiceMap};

/// Flattens every processing type's services into one list sorted by name.
///
/// The sort is stable, so services sharing a name keep the order of
/// `services_by_processing_type`.
pub fn build(services_by_processing_type: &IndexMap<String, ServiceMap>) -> Vec<ServiceDescriptor> {
    let mut catalog: Vec<ServiceDescriptor> = services_by_processing_type
        .iter()
        .flat_map(|(processing_type, services)| {
            services
                .iter()
                .map(move |(name, definition)| describe(processing_type, name, definition))
        })
        .collect();

    catalog.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(entries = catalog.len(), "built service catalog");
    catalog
}

fn describe(processing_type: &str, name: &str, definition: &ServiceDefinition) -> ServiceDescriptor {
    ServiceDescriptor {
        name: name.to_string(),
        categories: definition.categories.clone(),
        parameters: definition
            .parameters
            .iter()
            .map(|parameter| ParameterDescriptor {
                name: parameter.name.clone(),
                type_name: parameter.typ.ref_clazz_name.clone(),
            })
            .collect(),
        return_type_name: definition.return_type.ref_clazz_name.clone(),
        processing_type: processing_type.to_string(),
    }
}

/// Decodes one processing type's raw `services` object.
///
/// A missing or non-object value gives an empty map. Entries that do not
/// decode are skipped; the rest of the map is kept.
pub fn decode_services(processing_type: &str, raw: Option<&Value>) -> ServiceMap {
    let Some(entries) = raw.and_then(Value::as_object) else {
        warn!(processing_type, "no usable service definitions, contributing no services");
        return ServiceMap::new();
    };

    entries
        .iter()
        .filter_map(|(name, value)| {
            match serde_json::from_value::<ServiceDefinition>(value.clone()) {
                Ok(definition) => Some((name.clone(), definition)),
                Err(e) => {
                    warn!(processing_type, service = %name, "skipping malformed service definition: {e}");
                    None
                }
            }
        })
        .collect()
}

/// First entry named `name`, in catalog order.
pub fn find<'a>(catalog: &'a [ServiceDescriptor], name: &str) -> Option<&'a ServiceDescriptor> {
    catalog.iter().find(|service| service.name == name)
}

pub fn find_in<'a>(
    catalog: &'a [ServiceDescriptor],
    processing_type: &str,
    name: &str,
) -> Option<&'a ServiceDescriptor> {
    catalog
        .iter()
        .find(|service| service.processing_type == processing_type && service.name == name)
}

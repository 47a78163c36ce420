use crate::terminal::colors;
use colored::*;
use flowadmin_common::model::binding::ParameterBinding;
use flowadmin_common::model::catalog::{ParameterDescriptor, ServiceDescriptor};
use flowadmin_common::model::search::SearchHit;

pub type Detail = (String, ColoredString);

/// `java.util.Map[java.lang.String]` reads as `Map[String]`.
pub fn human_readable_type(type_name: &str) -> String {
    let mut out = String::with_capacity(type_name.len());
    let mut segment = String::new();
    for c in type_name.chars() {
        match c {
            '.' => segment.clear(),
            c if c.is_alphanumeric() || c == '_' || c == '$' => segment.push(c),
            c => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
        }
    }
    out.push_str(&segment);
    out
}

pub fn signature(parameters: &[ParameterDescriptor]) -> String {
    parameters
        .iter()
        .map(|parameter| format!("{}: {}", parameter.name, human_readable_type(&parameter.type_name)))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn service_to_details(service: &ServiceDescriptor) -> Vec<Detail> {
    let categories: String = if service.categories.is_empty() {
        "-".to_string()
    } else {
        service.categories.join(", ")
    };
    let parameters: String = if service.parameters.is_empty() {
        "none".to_string()
    } else {
        signature(&service.parameters)
    };

    vec![
        ("Type".to_string(), service.processing_type.color(colors::SECONDARY)),
        ("Categories".to_string(), categories.normal()),
        ("Params".to_string(), parameters.normal()),
        (
            "Returns".to_string(),
            human_readable_type(&service.return_type_name).color(colors::TYPE_NAME),
        ),
    ]
}

/// One detail per parameter, showing its declared type and bound expression.
pub fn bindings_to_details(service: &ServiceDescriptor, bindings: &[ParameterBinding]) -> Vec<Detail> {
    service
        .parameters
        .iter()
        .map(|parameter| {
            let expression: &str = bindings
                .iter()
                .find(|binding| binding.name == parameter.name)
                .map(|binding| binding.expression.body.as_str())
                .unwrap_or_default();
            let value: String = if expression.is_empty() {
                format!("{} {}", human_readable_type(&parameter.type_name), "(empty)".dimmed())
            } else {
                format!(
                    "{} = {}",
                    human_readable_type(&parameter.type_name),
                    expression.color(colors::EXPRESSION)
                )
            };
            (parameter.name.clone(), value.normal())
        })
        .collect()
}

pub fn hit_to_row(hit: &SearchHit) -> Vec<String> {
    vec![hit.process.clone(), hit.node.clone(), hit.category.clone()]
}

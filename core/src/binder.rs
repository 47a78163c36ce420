use tracing::debug;

use flowadmin_common::model::binding::{Expression, ParameterBinding};
use flowadmin_common::model::catalog::ParameterDescriptor;

/// One empty binding per parameter, in parameter order.
pub fn initialize(parameters: &[ParameterDescriptor]) -> Vec<ParameterBinding> {
    parameters
        .iter()
        .map(|parameter| ParameterBinding {
            name: parameter.name.clone(),
            expression: Expression::empty(),
        })
        .collect()
}

/// Returns a copy of `bindings` with the expression body of `name` replaced.
///
/// The language tag and every other binding are left as they were. An unknown
/// name returns an unchanged copy.
pub fn set_value(bindings: &[ParameterBinding], name: &str, body: &str) -> Vec<ParameterBinding> {
    let Some(index) = bindings.iter().position(|binding| binding.name == name) else {
        debug!(parameter = name, "ignoring edit of unknown parameter");
        return bindings.to_vec();
    };

    let mut updated: Vec<ParameterBinding> = bindings.to_vec();
    updated[index].expression.body = body.to_string();
    updated
}

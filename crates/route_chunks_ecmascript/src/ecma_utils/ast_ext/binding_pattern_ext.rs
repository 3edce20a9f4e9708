use oxc::ast::ast::{BindingIdentifier, BindingPattern, BindingPatternKind};

pub trait BindingPatternExt<'ast> {
  /// Every identifier bound by the pattern, in source order, descending into
  /// nested object/array patterns, rest elements and defaults.
  fn binding_identifiers_in_order(&self) -> Vec<&BindingIdentifier<'ast>>;
}

impl<'ast> BindingPatternExt<'ast> for BindingPattern<'ast> {
  fn binding_identifiers_in_order(&self) -> Vec<&BindingIdentifier<'ast>> {
    let mut identifiers = vec![];
    collect_binding_identifiers(self, &mut identifiers);
    identifiers
  }
}

fn collect_binding_identifiers<'me, 'ast>(
  pattern: &'me BindingPattern<'ast>,
  identifiers: &mut Vec<&'me BindingIdentifier<'ast>>,
) {
  match &pattern.kind {
    BindingPatternKind::BindingIdentifier(ident) => identifiers.push(ident),
    BindingPatternKind::ObjectPattern(object) => {
      for property in &object.properties {
        collect_binding_identifiers(&property.value, identifiers);
      }
      if let Some(rest) = &object.rest {
        collect_binding_identifiers(&rest.argument, identifiers);
      }
    }
    BindingPatternKind::ArrayPattern(array) => {
      for element in array.elements.iter().flatten() {
        collect_binding_identifiers(element, identifiers);
      }
      if let Some(rest) = &array.rest {
        collect_binding_identifiers(&rest.argument, identifiers);
      }
    }
    BindingPatternKind::AssignmentPattern(assignment) => {
      collect_binding_identifiers(&assignment.left, identifiers);
    }
  }
}

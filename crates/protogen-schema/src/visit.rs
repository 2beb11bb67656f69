use crate::node::{Enum, EnumValue, Import, Message, MessageField, Rpc, Service};

///
/// Visitor
///
/// Read-only traversal over a built document tree. Hooks default to
/// no-ops so a visitor implements only what it cares about.
///

pub trait Visitor {
    fn message(&mut self, _message: &Message) {}
    fn field(&mut self, _field: &MessageField) {}
    fn enumeration(&mut self, _enumeration: &Enum) {}
    fn enum_value(&mut self, _value: &EnumValue) {}
    fn service(&mut self, _service: &Service) {}
    fn rpc(&mut self, _rpc: &Rpc) {}
    fn import(&mut self, _import: &Import) {}
}

///
/// VisitableNode
///

pub trait VisitableNode {
    /// Drive the visitor over this node and all of its children.
    fn drive<V: Visitor>(&self, v: &mut V);
}

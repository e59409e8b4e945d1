use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Addressable handle returned to the invoking runtime on connect.
///
/// Carries only a descriptor label. It does not own the window; the invoker
/// holds it to keep a live reference to this dialog instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStub {
    descriptor: String,
    id: Uuid,
}

impl ConnectionStub {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            id: Uuid::new_v4(),
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_stub_is_distinct() {
        let a = ConnectionStub::new("PasteboardDialog");
        let b = ConnectionStub::new("PasteboardDialog");

        assert_eq!(a.descriptor(), b.descriptor());
        assert_ne!(a.id(), b.id());
    }
}

//! Identifier sources for generated shared parameters.

use uuid::Uuid;

/// Supplies one GUID per new shared parameter.
pub trait GuidSource {
    fn next_guid(&mut self) -> Uuid;
}

/// Random version 4 UUIDs. Two runs over the same document produce
/// different identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGuids;

impl GuidSource for RandomGuids {
    fn next_guid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers `00000000-0000-0000-0000-000000000001`,
/// `...0002`, and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialGuids {
    counter: u128,
}

impl SequentialGuids {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first identifier handed out is `start + 1`.
    pub fn starting_at(start: u128) -> Self {
        Self { counter: start }
    }
}

impl GuidSource for SequentialGuids {
    fn next_guid(&mut self) -> Uuid {
        self.counter = self.counter.wrapping_add(1);
        Uuid::from_u128(self.counter)
    }
}

impl<G: GuidSource + ?Sized> GuidSource for &mut G {
    fn next_guid(&mut self) -> Uuid {
        (**self).next_guid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_guids_count_up() {
        let mut guids = SequentialGuids::new();
        assert_eq!(
            guids.next_guid().to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        assert_eq!(
            guids.next_guid().to_string(),
            "00000000-0000-0000-0000-000000000002"
        );
    }

    #[test]
    fn random_guids_are_v4() {
        let guid = RandomGuids.next_guid();
        assert_eq!(guid.get_version_num(), 4);
        assert_ne!(guid, RandomGuids.next_guid());
    }
}

use e20sim_core::core::{MemAccess, MemoryObserver};
use mockall::mock;

mock! {
    pub Observer {}

    impl MemoryObserver for Observer {
        fn observe(&mut self, access: MemAccess);
    }
}

/// Observer that keeps every access it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub accesses: Vec<MemAccess>,
}

impl MemoryObserver for RecordingObserver {
    fn observe(&mut self, access: MemAccess) {
        self.accesses.push(access);
    }
}

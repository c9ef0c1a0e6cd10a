use time::OffsetDateTime;

/// Source of "now" for lifecycle decisions. The scheduler and the bid
/// acceptance path never read the wall clock directly, so scans can be
/// driven in tests without real delays.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::Clock,
        time::OffsetDateTime,
    };

    /// A clock pinned to a fixed instant.
    #[derive(Clone, Debug)]
    pub struct FrozenClock(pub OffsetDateTime);

    impl Clock for FrozenClock {
        fn now(&self) -> OffsetDateTime {
            self.0
        }
    }
}

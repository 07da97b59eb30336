use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::{
    error::Result,
    models::{ScheduleEntry, WeeklySchedule},
    service::CoachService,
    sync::{DebouncedSync, SnapshotSink, SyncStatus},
};

/// Writes whole-week snapshots to the coach service.
pub struct ScheduleSink {
    service: Arc<dyn CoachService>,
}

impl ScheduleSink {
    pub fn new(service: Arc<dyn CoachService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SnapshotSink<WeeklySchedule> for ScheduleSink {
    async fn persist(&self, snapshot: WeeklySchedule) -> Result<()> {
        self.service.put_schedule(&snapshot.to_document()).await?;
        Ok(())
    }
}

/// The weekly schedule with optimistic local edits.
///
/// Every edit is visible immediately through [`ScheduleEditor::schedule`];
/// the service receives the whole week once edits have been quiet for the
/// debounce window.
pub struct ScheduleEditor {
    schedule: WeeklySchedule,
    sync: DebouncedSync<WeeklySchedule>,
}

impl ScheduleEditor {
    /// Fetch the schedule and start editing it. Days the service does not
    /// know about are filled with empty entries.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Transport` if the schedule cannot be fetched.
    pub async fn load(service: Arc<dyn CoachService>, window: Duration) -> Result<Self> {
        let document = service.get_schedule().await?;
        let schedule = WeeklySchedule::from_document(&document);
        Ok(Self::with_schedule(service, schedule, window))
    }

    pub fn with_schedule(
        service: Arc<dyn CoachService>,
        schedule: WeeklySchedule,
        window: Duration,
    ) -> Self {
        let sink = Arc::new(ScheduleSink::new(service));
        Self {
            schedule,
            sync: DebouncedSync::with_window(sink, window),
        }
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Change one day and schedule a save of the whole week.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if `day` is not 0–6. Nothing is
    /// scheduled in that case.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn set_entry(&mut self, day: usize, entry: ScheduleEntry) -> Result<()> {
        self.schedule.set(day, entry)?;
        self.sync.notify_change(self.schedule.clone());
        Ok(())
    }

    pub fn status(&self) -> SyncStatus {
        self.sync.status()
    }

    pub fn is_saving(&self) -> bool {
        self.sync.is_saving()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncStatus> {
        self.sync.subscribe()
    }

    /// Save pending edits now.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Persistence` if the save fails.
    pub async fn flush(&self) -> Result<()> {
        self.sync.flush().await
    }

    /// Wait for armed and in-flight saves to finish.
    pub async fn settled(&self) {
        self.sync.settled().await;
    }
}

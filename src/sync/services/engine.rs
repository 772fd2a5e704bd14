//! One-way task reconciliation between two task services.

use crate::sync::domain::{SyncStats, SyncStatus, Task, TaskId, TaskMap, TaskMapError};
use crate::sync::ports::{TaskService, TaskServiceError};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Invocation parameters for one synchronisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    clean_orphans: bool,
    sync_completed_new_tasks: bool,
}

impl SyncOptions {
    /// Creates the default parameter set: no orphan cleaning, no completed
    /// new-task admission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls removal of mappings whose tasks exist on neither side.
    #[must_use]
    pub const fn with_clean_orphans(mut self, clean_orphans: bool) -> Self {
        self.clean_orphans = clean_orphans;
        self
    }

    /// Controls whether brand-new, already-completed source tasks are
    /// materialised in the destination.
    #[must_use]
    pub const fn with_sync_completed_new_tasks(mut self, sync_completed_new_tasks: bool) -> Self {
        self.sync_completed_new_tasks = sync_completed_new_tasks;
        self
    }

    /// Whether orphan mappings are removed during the run.
    #[must_use]
    pub const fn clean_orphans(&self) -> bool {
        self.clean_orphans
    }

    /// Whether completed source tasks without a mapping are materialised.
    #[must_use]
    pub const fn sync_completed_new_tasks(&self) -> bool {
        self.sync_completed_new_tasks
    }
}

/// Fatal errors that abort a run before any mutation.
#[derive(Debug, Error)]
pub enum SyncRunError {
    /// The source service could not be queried.
    #[error("failed to fetch source tasks: {0}")]
    SourceFetch(#[source] TaskServiceError),

    /// The destination service could not be queried.
    #[error("failed to fetch destination tasks: {0}")]
    DestinationFetch(#[source] TaskServiceError),
}

/// Errors raised while processing a single task.
///
/// These are caught at per-task granularity, logged, and counted in
/// [`SyncStats::errors`]; they never abort the run.
#[derive(Debug, Error)]
pub enum SyncTaskError {
    /// The identifier map rejected an operation.
    #[error(transparent)]
    Mapping(#[from] TaskMapError),

    /// The destination service rejected an operation.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

/// In-memory working set of one run: both task lists plus id-indexed
/// lookups over them.
struct RunContext {
    source_tasks: Vec<Box<dyn Task>>,
    destination_tasks: Vec<Box<dyn Task>>,
    source_index: HashMap<TaskId, usize>,
    destination_index: HashMap<TaskId, usize>,
}

impl RunContext {
    fn new(source_tasks: Vec<Box<dyn Task>>, destination_tasks: Vec<Box<dyn Task>>) -> Self {
        let source_index = index_by_id(&source_tasks);
        let destination_index = index_by_id(&destination_tasks);
        Self {
            source_tasks,
            destination_tasks,
            source_index,
            destination_index,
        }
    }

    /// Appends a freshly created destination task and keeps the index
    /// consistent with the list.
    fn register_destination(&mut self, task: Box<dyn Task>) {
        self.destination_index
            .insert(task.id().clone(), self.destination_tasks.len());
        self.destination_tasks.push(task);
    }
}

fn index_by_id(tasks: &[Box<dyn Task>]) -> HashMap<TaskId, usize> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| (task.id().clone(), position))
        .collect()
}

/// One-way synchronisation engine.
///
/// Pulls the full task sets from both services once per run, classifies
/// every source task against the identifier map, mutates the in-memory
/// destination list accordingly, and commits all decisions through a single
/// batched persist call on the destination service. The map is updated
/// incrementally during the run; persisting it afterwards is the caller's
/// job, which also means an externally terminated run leaves the durable
/// map in its pre-run state.
///
/// Exactly one run may be active against a given map at a time; callers
/// serialise invocations.
pub struct TaskSync<S, D, C = DefaultClock>
where
    S: TaskService,
    D: TaskService,
    C: Clock + Send + Sync,
{
    source: S,
    destination: D,
    map: TaskMap,
    last_sync: DateTime<Utc>,
    clock: C,
}

impl<S, D> TaskSync<S, D>
where
    S: TaskService,
    D: TaskService,
{
    /// Creates an engine over the given services and map.
    ///
    /// `last_sync` is the watermark below which source changes are assumed
    /// already reflected in the destination; when absent, every mapped task
    /// is considered changed.
    #[must_use]
    pub fn new(source: S, destination: D, map: TaskMap, last_sync: Option<DateTime<Utc>>) -> Self {
        Self::with_clock(source, destination, map, last_sync, DefaultClock)
    }
}

impl<S, D, C> TaskSync<S, D, C>
where
    S: TaskService,
    D: TaskService,
    C: Clock + Send + Sync,
{
    /// Creates an engine reading "now" from the supplied clock.
    #[must_use]
    pub fn with_clock(
        source: S,
        destination: D,
        map: TaskMap,
        last_sync: Option<DateTime<Utc>>,
        clock: C,
    ) -> Self {
        Self {
            source,
            destination,
            map,
            last_sync: last_sync.unwrap_or(DateTime::<Utc>::MIN_UTC),
            clock,
        }
    }

    /// Current state of the identifier map, for persistence after a run.
    #[must_use]
    pub const fn map(&self) -> &TaskMap {
        &self.map
    }

    /// Consumes the engine and returns the identifier map.
    #[must_use]
    pub fn into_map(self) -> TaskMap {
        self.map
    }

    /// The watermark, advanced to the finishing time of each run.
    #[must_use]
    pub const fn last_sync(&self) -> DateTime<Utc> {
        self.last_sync
    }

    /// Runs one synchronisation pass and returns its statistics.
    ///
    /// Per-task failures are logged, counted in [`SyncStats::errors`], and
    /// do not stop the remaining tasks from being processed; the same holds
    /// for a failing final persist call.
    ///
    /// # Errors
    ///
    /// Returns [`SyncRunError`] only when fetching the task set from either
    /// service fails, which aborts the run before any mutation.
    pub fn synchronise(&mut self, options: SyncOptions) -> Result<SyncStats, SyncRunError> {
        let started = self.clock.utc();
        debug!("fetching source tasks");
        let source_tasks = self
            .source
            .get_all_tasks()
            .map_err(SyncRunError::SourceFetch)?;
        debug!("fetching destination tasks");
        let destination_tasks = self
            .destination
            .get_all_tasks()
            .map_err(SyncRunError::DestinationFetch)?;
        let mut ctx = RunContext::new(source_tasks, destination_tasks);
        let mut stats = SyncStats::default();
        info!(last_sync = %self.last_sync, "starting sync");

        for position in 0..ctx.source_tasks.len() {
            if let Err(err) = self.process_source_task(&mut ctx, &mut stats, position, options) {
                stats.errors += 1;
                let task = ctx
                    .source_tasks
                    .get(position)
                    .map_or_else(String::new, |t| t.name().to_owned());
                warn!(task = %task, error = %err, "error syncing source task");
            }
        }

        for position in 0..ctx.destination_tasks.len() {
            self.flag_deleted_source(&mut ctx, &mut stats, position);
        }

        if options.clean_orphans() {
            self.clean_orphan_mappings(&ctx);
        }

        if let Err(err) = self.destination.persist_tasks(&ctx.destination_tasks) {
            stats.errors += 1;
            warn!(error = %err, "error persisting destination task changes");
        }

        let finished = self.clock.utc();
        stats.duration = finished - started;
        self.last_sync = finished;
        info!(
            skipped = stats.skipped,
            created = stats.created,
            updated = stats.updated,
            completed = stats.completed,
            deleted = stats.deleted,
            errors = stats.errors,
            duration_ms = stats.duration.num_milliseconds(),
            "sync complete"
        );
        Ok(stats)
    }

    /// Classifies one source task against the map and applies the decision.
    fn process_source_task(
        &mut self,
        ctx: &mut RunContext,
        stats: &mut SyncStats,
        position: usize,
        options: SyncOptions,
    ) -> Result<(), SyncTaskError> {
        let Some(source) = ctx.source_tasks.get(position) else {
            return Ok(());
        };
        let mapped = self.map.try_destination_for(source.id()).cloned();
        match mapped {
            Some(destination_id) => {
                match ctx.destination_index.get(&destination_id).copied() {
                    Some(destination_position) => {
                        self.refresh_mapped_destination(ctx, stats, position, destination_position);
                        Ok(())
                    }
                    None => self.recover_missing_destination(ctx, stats, position),
                }
            }
            None => self.admit_new_source_task(ctx, stats, position, options),
        }
    }

    /// Both sides of a mapping exist: skip when stale, otherwise copy the
    /// source fields across.
    fn refresh_mapped_destination(
        &self,
        ctx: &mut RunContext,
        stats: &mut SyncStats,
        source_position: usize,
        destination_position: usize,
    ) {
        let Some(source) = ctx.source_tasks.get(source_position) else {
            return;
        };
        if source
            .last_modified()
            .is_some_and(|modified| modified < self.last_sync)
        {
            stats.skipped += 1;
            return;
        }

        if source.completed() {
            info!(task = %source.name(), "completing destination task");
            stats.completed += 1;
        } else {
            info!(task = %source.name(), "updating destination task");
            stats.updated += 1;
        }
        if let Some(destination) = ctx.destination_tasks.get_mut(destination_position) {
            destination.copy_fields(source.as_ref(), SyncStatus::Updated);
        }
    }

    /// A mapping exists but the destination task has vanished: recreate it
    /// for live source tasks, leave completed ones alone.
    fn recover_missing_destination(
        &mut self,
        ctx: &mut RunContext,
        stats: &mut SyncStats,
        source_position: usize,
    ) -> Result<(), SyncTaskError> {
        let Some(source) = ctx.source_tasks.get(source_position) else {
            return Ok(());
        };
        if source.completed() {
            // Finished work is never recreated; the stale mapping stays put.
            debug!(task = %source.name(), "ignoring completed source task with missing destination");
            stats.skipped += 1;
            return Ok(());
        }

        info!(task = %source.name(), "recreating destination task");
        let source_id = source.id().clone();
        self.map.unmap(&source_id);
        let created = self.destination.create(source.as_ref())?;
        let created_id = created.id().clone();
        self.map.map(source_id, created_id)?;
        ctx.register_destination(created);
        stats.created += 1;
        Ok(())
    }

    /// No mapping exists: materialise a destination counterpart unless the
    /// task arrived already completed and the options exclude those.
    fn admit_new_source_task(
        &mut self,
        ctx: &mut RunContext,
        stats: &mut SyncStats,
        source_position: usize,
        options: SyncOptions,
    ) -> Result<(), SyncTaskError> {
        let Some(source) = ctx.source_tasks.get(source_position) else {
            return Ok(());
        };
        if source.completed() && !options.sync_completed_new_tasks() {
            debug!(task = %source.name(), "skipping already completed new source task");
            return Ok(());
        }

        info!(task = %source.name(), completed = source.completed(), "creating destination task");
        let source_id = source.id().clone();
        let created = self.destination.create(source.as_ref())?;
        let created_id = created.id().clone();
        self.map.map(source_id, created_id)?;
        ctx.register_destination(created);
        stats.created += 1;
        Ok(())
    }

    /// A mapped destination whose source task disappeared gets flagged;
    /// the actual removal is the persist layer's job.
    fn flag_deleted_source(
        &self,
        ctx: &mut RunContext,
        stats: &mut SyncStats,
        destination_position: usize,
    ) {
        let Some(destination) = ctx.destination_tasks.get_mut(destination_position) else {
            return;
        };
        let Some(source_id) = self.map.try_source_for(destination.id()) else {
            return;
        };
        if ctx.source_index.contains_key(source_id) {
            return;
        }
        debug!(source = %source_id, task = %destination.name(), "flagging destination task as deleted");
        destination.set_status(SyncStatus::Deleted);
        stats.deleted += 1;
    }

    /// Drops mappings for which neither endpoint task exists, so the map
    /// does not grow without bound across runs.
    fn clean_orphan_mappings(&mut self, ctx: &RunContext) {
        let orphans: Vec<TaskId> = self
            .map
            .entries()
            .filter(|(source_id, destination_id)| {
                !ctx.source_index.contains_key(*source_id)
                    && !ctx.destination_index.contains_key(*destination_id)
            })
            .map(|(source_id, _)| source_id.clone())
            .collect();
        for source_id in orphans {
            debug!(source = %source_id, "removing orphan mapping");
            self.map.unmap(&source_id);
        }
    }
}

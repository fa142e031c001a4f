//! Scheduling loop
//!
//! Owns the board and the machine set. [`Scheduler::start`] validates every
//! machine and initialises the board's devices before the first tick; after
//! that the loop only sequences refresh, update and step.

use super::board::Board;
use super::set::MachineSet;
use crate::config::SchedulerConfig;
use crate::error::StartupError;
use crate::time::{elapsed_since, Clock, Millis};

/// Loop health counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickStats {
    /// Completed ticks
    pub ticks: u64,
    /// Timestamp of the most recent tick
    pub last_tick: Option<Millis>,
    /// Largest observed gap between two consecutive ticks
    pub max_gap_ms: Millis,
}

impl TickStats {
    fn record(&mut self, now: Millis) {
        if let Some(last) = self.last_tick {
            self.max_gap_ms = self.max_gap_ms.max(elapsed_since(last, now));
        }
        self.last_tick = Some(now);
        self.ticks = self.ticks.wrapping_add(1);
    }
}

/// Cooperative round-robin scheduler
pub struct Scheduler<B, M> {
    board: B,
    machines: M,
    stats: TickStats,
    /// 0 disables the periodic status report
    status_interval_ms: Millis,
    last_status: Millis,
}

impl<B: Board, M: MachineSet<B>> Scheduler<B, M> {
    /// Validate machines, initialise devices and hand back a ready scheduler
    ///
    /// No machine is stepped and no device is touched past `init` if this
    /// fails.
    pub fn start(mut board: B, machines: M) -> Result<Self, StartupError> {
        if let Err(err) = machines.validate() {
            error!("machine validation failed: {}", err);
            return Err(err.into());
        }

        if let Err(fault) = board.init_devices() {
            error!("device {=str} failed to init: {}", fault.device, fault.error);
            return Err(fault.into());
        }

        info!("scheduler started with {=usize} machines", machines.len());

        Ok(Self {
            board,
            machines,
            stats: TickStats::default(),
            status_interval_ms: 0,
            last_status: 0,
        })
    }

    /// Apply scheduler settings from the runtime config
    pub fn with_config(mut self, config: &SchedulerConfig) -> Self {
        self.status_interval_ms = config.status_interval_ms;
        self
    }

    /// Log loop statistics and machine states every `interval_ms` (0 = never)
    pub fn with_status_interval(mut self, interval_ms: Millis) -> Self {
        self.status_interval_ms = interval_ms;
        self
    }

    /// Run one tick at `now`
    pub fn tick(&mut self, now: Millis) {
        self.board.refresh_inputs(now);
        self.board.update_devices(now);
        self.machines.step_all(&mut self.board, now);

        if self.stats.last_tick.is_none() {
            self.last_status = now;
        }
        self.stats.record(now);
        self.report_status(now);
    }

    /// Tick forever using `clock` as the time source
    pub fn run<C: Clock>(&mut self, clock: C) -> ! {
        loop {
            self.tick(clock.now_ms());
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn machines(&self) -> &M {
        &self.machines
    }

    pub fn machines_mut(&mut self) -> &mut M {
        &mut self.machines
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    pub fn status_interval_ms(&self) -> Millis {
        self.status_interval_ms
    }

    /// Give back the board and machines
    pub fn into_parts(self) -> (B, M) {
        (self.board, self.machines)
    }

    fn report_status(&mut self, now: Millis) {
        if self.status_interval_ms == 0
            || elapsed_since(self.last_status, now) < self.status_interval_ms
        {
            return;
        }
        self.last_status = now;

        debug!(
            "ticks={=u64} max_gap={=u32}ms",
            self.stats.ticks,
            self.stats.max_gap_ms
        );
        self.machines.for_each(&mut |machine| {
            debug!("  {=str}: {=str}", machine.name(), machine.state_name());
        });
    }
}

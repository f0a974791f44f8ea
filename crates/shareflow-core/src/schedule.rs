//! Scheduled-time value objects
//!
//! The provisioning engine takes scheduled times as fixed-width strings:
//! `"HH:MM"` for the daily backup window and `"D:HH:MM"` for the weekly
//! maintenance window, where `D` is a 1-based weekday (Monday = 1). These
//! types validate the raw components once at construction and expose only
//! the canonical form.

use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Day of the week, 1-based on the wire (Monday = 1 ... Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 1-based index used in the maintenance timestamp.
    pub fn wire_index(self) -> u8 {
        self as u8 + 1
    }
}

/// Daily automatic backup start time.
///
/// Deserialization routes through [`BackupStartTime::new`], so a payload
/// with out-of-range components fails the same way direct construction
/// does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBackupStartTime")]
pub struct BackupStartTime {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct RawBackupStartTime {
    hour: u8,
    minute: u8,
}

impl TryFrom<RawBackupStartTime> for BackupStartTime {
    type Error = ScheduleError;

    fn try_from(raw: RawBackupStartTime) -> Result<Self, ScheduleError> {
        Self::new(raw.hour, raw.minute)
    }
}

impl BackupStartTime {
    /// Hour is allowed the inclusive 0-24 range the engine accepts.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        check_clock(hour, minute)?;
        Ok(Self { hour, minute })
    }

    /// Canonical `"HH:MM"` form.
    pub fn to_timestamp(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Weekly maintenance window start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMaintenanceTime")]
pub struct MaintenanceTime {
    day: Weekday,
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct RawMaintenanceTime {
    day: Weekday,
    hour: u8,
    minute: u8,
}

impl TryFrom<RawMaintenanceTime> for MaintenanceTime {
    type Error = ScheduleError;

    fn try_from(raw: RawMaintenanceTime) -> Result<Self, ScheduleError> {
        Self::new(raw.day, raw.hour, raw.minute)
    }
}

impl MaintenanceTime {
    pub fn new(day: Weekday, hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        check_clock(hour, minute)?;
        Ok(Self { day, hour, minute })
    }

    /// Canonical `"D:HH:MM"` form.
    pub fn to_timestamp(&self) -> String {
        format!("{}:{:02}:{:02}", self.day.wire_index(), self.hour, self.minute)
    }
}

fn check_clock(hour: u8, minute: u8) -> Result<(), ScheduleError> {
    if hour > 24 {
        return Err(ScheduleError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(ScheduleError::MinuteOutOfRange(minute));
    }
    Ok(())
}

use serde::Serialize;

/// Conventional dosing schedules offered by the CLI.
/// The calculator itself accepts any positive doses-per-day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DosingInterval {
    Every6h,  // 4 doses/day
    Every8h,  // 3 doses/day
    Every12h, // 2 doses/day
    Every24h, // 1 dose/day
}

impl DosingInterval {
    pub fn doses_per_day(&self) -> u32 {
        match self {
            DosingInterval::Every6h => 4,
            DosingInterval::Every8h => 3,
            DosingInterval::Every12h => 2,
            DosingInterval::Every24h => 1,
        }
    }

    pub fn hours(&self) -> u32 {
        24 / self.doses_per_day()
    }

    pub fn from_doses(doses: u32) -> Option<Self> {
        match doses {
            4 => Some(DosingInterval::Every6h),
            3 => Some(DosingInterval::Every8h),
            2 => Some(DosingInterval::Every12h),
            1 => Some(DosingInterval::Every24h),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        format!("every {}h", self.hours())
    }
}

/// Human readable schedule for an arbitrary doses/day value.
pub fn describe_schedule(doses: u32) -> String {
    match DosingInterval::from_doses(doses) {
        Some(interval) => format!("{} dose(s)/day, {}", doses, interval.label()),
        None => format!("{} dose(s)/day", doses),
    }
}

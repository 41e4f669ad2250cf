//! Fitting slot bank partitioning by numeric slot flag

/// Slot-flag ranges for the four fitting banks.
pub mod slot_flags {
    /// High slot flags (weapons, remote reps, command bursts)
    pub const HIGH_MIN: u32 = 27;
    pub const HIGH_MAX: u32 = 34;
    /// Mid slot flags (tackle, ewar, shield modules)
    pub const MID_MIN: u32 = 19;
    pub const MID_MAX: u32 = 26;
    /// Low slot flags (damage mods, armor modules)
    pub const LOW_MIN: u32 = 11;
    pub const LOW_MAX: u32 = 18;
    /// Rig slot flags
    pub const RIG_MIN: u32 = 92;
    pub const RIG_MAX: u32 = 94;
}

/// One of the four fitting banks a module can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotBank {
    High,
    Mid,
    Low,
    Rig,
}

impl SlotBank {
    /// Classify a slot flag into a bank. Cargo, drone bay, subsystem and
    /// implant flags fall outside all four ranges and return None.
    pub fn from_flag(flag: u32) -> Option<Self> {
        use slot_flags::*;
        match flag {
            HIGH_MIN..=HIGH_MAX => Some(SlotBank::High),
            MID_MIN..=MID_MAX => Some(SlotBank::Mid),
            LOW_MIN..=LOW_MAX => Some(SlotBank::Low),
            RIG_MIN..=RIG_MAX => Some(SlotBank::Rig),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_boundaries() {
        assert_eq!(SlotBank::from_flag(27), Some(SlotBank::High));
        assert_eq!(SlotBank::from_flag(34), Some(SlotBank::High));
        assert_eq!(SlotBank::from_flag(19), Some(SlotBank::Mid));
        assert_eq!(SlotBank::from_flag(26), Some(SlotBank::Mid));
        assert_eq!(SlotBank::from_flag(11), Some(SlotBank::Low));
        assert_eq!(SlotBank::from_flag(18), Some(SlotBank::Low));
        assert_eq!(SlotBank::from_flag(92), Some(SlotBank::Rig));
        assert_eq!(SlotBank::from_flag(94), Some(SlotBank::Rig));
    }

    #[test]
    fn non_fitting_flags_are_ignored() {
        // Cargo (5), drone bay (87), subsystems (125+)
        assert_eq!(SlotBank::from_flag(5), None);
        assert_eq!(SlotBank::from_flag(87), None);
        assert_eq!(SlotBank::from_flag(125), None);
        assert_eq!(SlotBank::from_flag(0), None);
    }
}

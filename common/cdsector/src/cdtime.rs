//! Minutes/seconds/frames disc addresses as stored in sector headers

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CdTime {
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl CdTime {
    pub const ZERO: Self = Self { minutes: 0, seconds: 0, frames: 0 };

    // Two BCD digits
    pub const MAX_MINUTES: u8 = 100;
    pub const SECONDS_PER_MINUTE: u8 = 60;
    pub const FRAMES_PER_SECOND: u8 = 75;

    pub const MAX_SECTORS: u32 = 100 * 60 * 75;

    // Logical block 0 starts after the 2-second pregap of the first track
    pub const LBA_OFFSET: u32 = 2 * 75;

    /// # Panics
    ///
    /// Panics if any component is out of range.
    #[must_use]
    pub fn new(minutes: u8, seconds: u8, frames: u8) -> Self {
        assert!(minutes < Self::MAX_MINUTES, "Minutes must be less than {}", Self::MAX_MINUTES);
        assert!(
            seconds < Self::SECONDS_PER_MINUTE,
            "Seconds must be less than {}",
            Self::SECONDS_PER_MINUTE
        );
        assert!(
            frames < Self::FRAMES_PER_SECOND,
            "Frames must be less than {}",
            Self::FRAMES_PER_SECOND
        );

        Self { minutes, seconds, frames }
    }

    #[must_use]
    pub fn new_checked(minutes: u8, seconds: u8, frames: u8) -> Option<Self> {
        (minutes < Self::MAX_MINUTES
            && seconds < Self::SECONDS_PER_MINUTE
            && frames < Self::FRAMES_PER_SECOND)
            .then_some(Self { minutes, seconds, frames })
    }

    /// Decode a header address where each component is stored as two BCD digits.
    #[must_use]
    pub fn from_bcd(minutes: u8, seconds: u8, frames: u8) -> Option<Self> {
        Self::new_checked(bcd_to_binary(minutes)?, bcd_to_binary(seconds)?, bcd_to_binary(frames)?)
    }

    #[must_use]
    pub fn to_sector_number(self) -> u32 {
        (u32::from(Self::SECONDS_PER_MINUTE) * u32::from(self.minutes) + u32::from(self.seconds))
            * u32::from(Self::FRAMES_PER_SECOND)
            + u32::from(self.frames)
    }

    /// # Panics
    ///
    /// Panics if `sector_number` is not addressable with two-digit minutes.
    #[must_use]
    pub fn from_sector_number(sector_number: u32) -> Self {
        assert!(sector_number < Self::MAX_SECTORS, "Invalid sector number: {sector_number}");

        let frames = sector_number % u32::from(Self::FRAMES_PER_SECOND);
        let seconds = (sector_number / u32::from(Self::FRAMES_PER_SECOND))
            % u32::from(Self::SECONDS_PER_MINUTE);
        let minutes = sector_number
            / (u32::from(Self::FRAMES_PER_SECOND) * u32::from(Self::SECONDS_PER_MINUTE));

        Self::new(minutes as u8, seconds as u8, frames as u8)
    }

    /// Logical block address, or `None` for addresses inside the initial 2-second pregap.
    #[must_use]
    pub fn to_lba(self) -> Option<u32> {
        self.to_sector_number().checked_sub(Self::LBA_OFFSET)
    }
}

fn bcd_to_binary(value: u8) -> Option<u8> {
    let msb = value >> 4;
    let lsb = value & 0x0F;
    (msb < 10 && lsb < 10).then_some(10 * msb + lsb)
}

impl Display for CdTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

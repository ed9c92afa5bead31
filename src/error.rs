use core::fmt;

/// Frame failed its CRC check.
///
/// `residue` is the checksum over the whole frame including the trailing
/// CRC byte. It is zero for an intact frame and therefore never zero here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CrcMismatch {
	pub residue: u8,
}

impl fmt::Display for CrcMismatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "crc mismatch (residue {:#04x})", self.residue)
	}
}

impl core::error::Error for CrcMismatch {}

use crate::error::CrcMismatch;

const MSB: u8 = 0x80;

/// Fold a single byte into `crc`, MSB first, without reflection.
#[inline]
pub const fn update(polynomial: u8, mut crc: u8, byte: u8) -> u8 {
	crc ^= byte;
	let mut bit = 0;
	while bit < 8 {
		if crc & MSB != 0 {
			crc = (crc << 1) ^ polynomial;
		} else {
			crc <<= 1;
		}
		bit += 1;
	}
	crc
}

/// One-shot CRC8 over `bytes`, seeded with `init`.
///
/// Gives the same value as a fresh [`Crc8`] fed with the same bytes, but
/// can be evaluated in `const` context.
pub const fn checksum(polynomial: u8, init: u8, bytes: &[u8]) -> u8 {
	let mut crc = init;
	let mut i = 0;
	while i < bytes.len() {
		crc = update(polynomial, crc, bytes[i]);
		i += 1;
	}
	crc
}

/// Incremental CRC8 engine.
///
/// The polynomial and the seed are fixed when the engine is built. The
/// x^8 term of the polynomial is implicit, so e.g. SMBus PEC uses
/// `0x07`. No reflection and no final XOR is applied; [`Crc8::result`]
/// is the raw accumulator.
///
/// The engine is neither `Clone` nor `Copy`. Build a second
/// one from [`Crc8::polynomial`] and [`Crc8::init`] if an independent
/// computation is needed.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc8 {
	polynomial: u8,
	init: u8,
	crc: u8,
}

impl Crc8 {
	pub const fn new(polynomial: u8, init: u8) -> Self {
		Self {
			polynomial,
			init,
			crc: init,
		}
	}

	#[inline]
	pub const fn polynomial(&self) -> u8 {
		self.polynomial
	}

	#[inline]
	pub const fn init(&self) -> u8 {
		self.init
	}

	/// Start over as if freshly constructed.
	pub fn reset(&mut self) {
		self.crc = self.init;
	}

	#[inline]
	pub fn update(&mut self, byte: u8) {
		self.crc = update(self.polynomial, self.crc, byte);
	}

	#[inline]
	pub fn update_slice(&mut self, bytes: &[u8]) {
		for byte in bytes.iter() {
			self.update(*byte);
		}
	}

	/// Checksum of everything fed since construction or the last reset.
	#[inline]
	pub const fn result(&self) -> u8 {
		self.crc
	}

	/// Reset, feed `bytes` and return the result.
	///
	/// The engine keeps the checksum of `bytes` afterwards, so more data
	/// may be appended with [`Crc8::update`].
	pub fn checksum(&mut self, bytes: &[u8]) -> u8 {
		self.reset();
		self.update_slice(bytes);
		self.crc
	}

	/// Check a frame consisting of payload followed by its CRC byte.
	///
	/// Feeding the CRC byte into the accumulator that produced it always
	/// clears it, so an intact frame leaves a zero residue. With polynomial
	/// `0x00` every accumulator collapses to zero and nothing is detected.
	///
	/// Like [`Crc8::checksum`] this resets the engine first and leaves the
	/// residue in the accumulator; a checksum in progress is lost.
	pub fn verify(&mut self, frame: &[u8]) -> Result<(), CrcMismatch> {
		match self.checksum(frame) {
			0 => Ok(()),
			residue => {
				#[cfg(feature = "defmt")]
				defmt::debug!(
					"crc8 mismatch: poly={=u8:#x} len={=usize} residue={=u8:#x}",
					self.polynomial,
					frame.len(),
					residue
				);
				Err(CrcMismatch { residue })
			}
		}
	}
}

impl Extend<u8> for Crc8 {
	fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
		for byte in iter {
			self.update(byte);
		}
	}
}

impl<'x> Extend<&'x u8> for Crc8 {
	fn extend<I: IntoIterator<Item = &'x u8>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied());
	}
}

//! Mock SPI implementation for testing

use super::MockTimer;
use crate::platform::{
    completion::CompletionFlag,
    error::{PlatformError, SpiError},
    traits::{SpiConfig, SpiInterface},
    Result,
};
use core::cell::RefCell;
use std::collections::VecDeque;
use std::vec::Vec;

/// SPI transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpiTransaction {
    /// Transfer (full-duplex)
    Transfer { write: Vec<u8>, read: Vec<u8> },
    /// Write only
    Write { data: Vec<u8> },
}

/// Mock SPI implementation
///
/// Records all transactions for test verification and returns
/// pre-programmed bytes on the receive line (0x00 once exhausted).
///
/// Each call goes through the same completion path as an interrupt-driven
/// peripheral: the flag is reset, the "interrupt" signals it, and the caller
/// waits on it with the configured timeout. A stalled mock never signals,
/// so calls fail with `SpiError::Timeout` (or hang when no timeout is set).
#[derive(Debug)]
pub struct MockSpi {
    config: SpiConfig,
    transactions: RefCell<Vec<SpiTransaction>>,
    read_data: RefCell<VecDeque<u8>>,
    completion: CompletionFlag,
    timer: MockTimer,
    stalled: bool,
    fail_next: Option<SpiError>,
}

impl MockSpi {
    /// Create a new mock SPI with its own clock
    pub fn new(config: SpiConfig) -> Self {
        Self::with_timer(config, MockTimer::new())
    }

    /// Create a new mock SPI that waits on a shared clock
    pub fn with_timer(config: SpiConfig, timer: MockTimer) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(VecDeque::new()),
            completion: CompletionFlag::new(),
            timer,
            stalled: false,
            fail_next: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<SpiTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Replace the bytes returned on the receive line
    pub fn set_read_data(&mut self, data: &[u8]) {
        let mut read_data = self.read_data.borrow_mut();
        read_data.clear();
        read_data.extend(data.iter().copied());
    }

    /// Append bytes to the receive line
    pub fn queue_read_data(&mut self, data: &[u8]) {
        self.read_data.borrow_mut().extend(data.iter().copied());
    }

    /// Stop (or resume) signalling transfer completion
    pub fn set_stalled(&mut self, stalled: bool) {
        self.stalled = stalled;
    }

    /// Fail the next call with `error` before anything is transmitted
    pub fn fail_next(&mut self, error: SpiError) {
        self.fail_next = Some(error);
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn complete(&mut self, transaction: SpiTransaction) -> Result<()> {
        self.transactions.borrow_mut().push(transaction);
        if !self.stalled {
            self.completion.signal();
        }
        self.completion.wait(&mut self.timer, self.config.timeout_us)
    }

    fn take_failure(&mut self) -> Result<()> {
        match self.fail_next.take() {
            Some(error) => Err(PlatformError::Spi(error)),
            None => Ok(()),
        }
    }
}

impl SpiInterface for MockSpi {
    fn transfer(&mut self, write_buffer: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        if write_buffer.len() != read_buffer.len() {
            return Err(PlatformError::Spi(SpiError::LengthMismatch));
        }
        self.take_failure()?;
        self.completion.reset();

        {
            let mut read_data = self.read_data.borrow_mut();
            for byte in read_buffer.iter_mut() {
                *byte = read_data.pop_front().unwrap_or(0x00);
            }
        }

        self.complete(SpiTransaction::Transfer {
            write: write_buffer.to_vec(),
            read: read_buffer.to_vec(),
        })
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.take_failure()?;
        self.completion.reset();

        self.complete(SpiTransaction::Write {
            data: data.to_vec(),
        })
    }

    fn config(&self) -> SpiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::TimerInterface;

    #[test]
    fn test_mock_spi_write() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.write(&[0x20, 0x6F]).unwrap();

        let transactions = spi.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            SpiTransaction::Write {
                data: vec![0x20, 0x6F]
            }
        );
    }

    #[test]
    fn test_mock_spi_transfer() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.set_read_data(&[0x00, 0x12, 0x34]);

        let mut read_buf = [0u8; 3];
        spi.transfer(&[0xE8, 0x00, 0x00], &mut read_buf).unwrap();

        assert_eq!(read_buf, [0x00, 0x12, 0x34]);
        assert_eq!(
            spi.transactions()[0],
            SpiTransaction::Transfer {
                write: vec![0xE8, 0x00, 0x00],
                read: vec![0x00, 0x12, 0x34]
            }
        );
    }

    #[test]
    fn test_mock_spi_exhausted_reads_zero() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.set_read_data(&[0xAA]);

        let mut read_buf = [0xFFu8; 3];
        spi.transfer(&[0; 3], &mut read_buf).unwrap();
        assert_eq!(read_buf, [0xAA, 0x00, 0x00]);
    }

    #[test]
    fn test_mock_spi_length_mismatch() {
        let mut spi = MockSpi::new(SpiConfig::default());
        let mut read_buf = [0u8; 2];
        assert_eq!(
            spi.transfer(&[0; 3], &mut read_buf),
            Err(PlatformError::Spi(SpiError::LengthMismatch))
        );
        assert!(spi.transactions().is_empty());
    }

    #[test]
    fn test_mock_spi_stalled_times_out() {
        let timer = MockTimer::new();
        let mut spi = MockSpi::with_timer(SpiConfig::default(), timer.clone());
        spi.set_stalled(true);

        assert_eq!(
            spi.write(&[0x20, 0x6F]),
            Err(PlatformError::Spi(SpiError::Timeout))
        );
        assert_eq!(timer.now_us(), 10_000);

        spi.set_stalled(false);
        assert!(spi.write(&[0x20, 0x6F]).is_ok());
    }

    #[test]
    fn test_mock_spi_fail_next() {
        let mut spi = MockSpi::new(SpiConfig::default());
        spi.fail_next(SpiError::Overrun);

        assert_eq!(
            spi.write(&[0x00]),
            Err(PlatformError::Spi(SpiError::Overrun))
        );
        assert!(spi.write(&[0x00]).is_ok());
        assert_eq!(spi.transactions().len(), 1);
    }

    #[test]
    fn test_mock_spi_default_bus_settings() {
        let spi = MockSpi::new(SpiConfig::default());
        assert_eq!(spi.frequency(), 1_000_000);
        assert_eq!(
            spi.config().mode,
            crate::platform::traits::SpiMode::Mode3
        );
        assert_eq!(spi.config().timeout_us, Some(10_000));
    }
}

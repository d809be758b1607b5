//! Diagnostic reporting
//!
//! Rejected calls are reported to a [`DiagnosticSink`] as a
//! `(module, instance, service, code)` tuple. Reporting is fire-and-forget:
//! the driver never looks at what the sink does with it.

use heapless::Deque;

use crate::error::{DioError, ServiceId};

/// Receiver of driver error reports
pub trait DiagnosticSink {
    /// Record one error report
    fn report_error(&mut self, module_id: u16, instance_id: u8, service_id: u8, error_code: u8);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report_error(&mut self, module_id: u16, instance_id: u8, service_id: u8, error_code: u8) {
        (**self).report_error(module_id, instance_id, service_id, error_code);
    }
}

/// Sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn report_error(&mut self, _module_id: u16, _instance_id: u8, _service_id: u8, _error_code: u8) {}
}

/// One recorded error report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiagnosticReport {
    pub module_id: u16,
    pub instance_id: u8,
    pub service_id: u8,
    pub error_code: u8,
}

impl DiagnosticReport {
    /// Decoded service, if the id is one of ours
    pub fn service(&self) -> Option<ServiceId> {
        ServiceId::from_u8(self.service_id)
    }

    /// Decoded error, if the code is one of ours
    pub fn error(&self) -> Option<DioError> {
        DioError::from_code(self.error_code)
    }
}

/// Ring of the most recent `N` error reports
///
/// Keeps reports for offline inspection (debugger, telemetry dump). When
/// full, the oldest report is dropped.
#[derive(Debug, Clone)]
pub struct DiagnosticLog<const N: usize> {
    reports: Deque<DiagnosticReport, N>,
    /// Reports received since creation, including dropped ones
    total: u32,
}

impl<const N: usize> Default for DiagnosticLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DiagnosticLog<N> {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            reports: Deque::new(),
            total: 0,
        }
    }

    /// Number of retained reports
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Check if no report is retained
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Reports received since creation
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Most recent report
    pub fn last(&self) -> Option<&DiagnosticReport> {
        self.reports.back()
    }

    /// Retained reports, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticReport> {
        self.reports.iter()
    }

    /// Check if a report for `service` with `error` is retained
    pub fn contains(&self, service: ServiceId, error: DioError) -> bool {
        self.reports
            .iter()
            .any(|r| r.service_id == service.as_u8() && r.error_code == error.code())
    }

    /// Drop every retained report
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl<const N: usize> DiagnosticSink for DiagnosticLog<N> {
    fn report_error(&mut self, module_id: u16, instance_id: u8, service_id: u8, error_code: u8) {
        self.total = self.total.saturating_add(1);

        if self.reports.is_full() {
            self.reports.pop_front();
        }
        // Cannot fail for N > 0: a slot was freed above. heapless rejects
        // a zero-capacity Deque at compile time.
        let _ = self.reports.push_back(DiagnosticReport {
            module_id,
            instance_id,
            service_id,
            error_code,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_reports() {
        let mut log = DiagnosticLog::<4>::new();
        assert!(log.is_empty());

        log.report_error(120, 0, 0x01, 0xF0);

        assert_eq!(log.len(), 1);
        let report = log.last().unwrap();
        assert_eq!(report.service(), Some(ServiceId::WriteChannel));
        assert_eq!(report.error(), Some(DioError::Uninitialized));
        assert!(log.contains(ServiceId::WriteChannel, DioError::Uninitialized));
        assert!(!log.contains(ServiceId::ReadChannel, DioError::Uninitialized));
    }

    #[test]
    fn test_log_drops_oldest_when_full() {
        let mut log = DiagnosticLog::<2>::new();
        log.report_error(120, 0, 0x00, 0x0A);
        log.report_error(120, 0, 0x01, 0x0A);
        log.report_error(120, 0, 0x11, 0x0A);

        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 3);
        let services: Vec<u8> = log.iter().map(|r| r.service_id).collect();
        assert_eq!(services, [0x01u8, 0x11]);
    }

    #[test]
    fn test_clear() {
        let mut log = DiagnosticLog::<2>::new();
        log.report_error(120, 0, 0x10, 0x10);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total(), 1);
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        fn report<S: DiagnosticSink>(mut sink: S) {
            sink.report_error(120, 0, 0x12, 0x20);
        }

        let mut log = DiagnosticLog::<1>::new();
        report(&mut log);
        assert!(log.contains(ServiceId::GetVersionInfo, DioError::ParamPointer));
    }
}

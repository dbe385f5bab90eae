use crate::ingest::capture::{CaptureError, FrameSource};

/// Read timeout so the feeder can notice a stop request.
const READ_TIMEOUT_MS: i32 = 250;

pub struct PcapSource {
    capture: pcap::Capture<pcap::Active>,
}

impl PcapSource {
    pub fn open(device: &str, promiscuous: bool, snaplen: u64) -> Result<Self, CaptureError> {
        let open_error = |e: pcap::Error| CaptureError::Open {
            device: device.to_string(),
            reason: e.to_string(),
        };

        let capture = pcap::Capture::from_device(device)
            .map_err(open_error)?
            .promisc(promiscuous)
            .snaplen(i32::try_from(snaplen).unwrap_or(i32::MAX))
            .timeout(READ_TIMEOUT_MS)
            .open()
            .map_err(open_error)?;

        tracing::info!(device, promiscuous, "capture device opened");

        Ok(Self { capture })
    }
}

impl FrameSource for PcapSource {
    fn apply_filter(&mut self, expression: &str) -> Result<(), CaptureError> {
        self.capture
            .filter(expression, true)
            .map_err(|e| CaptureError::Filter {
                expression: expression.to_string(),
                reason: e.to_string(),
            })
    }

    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CaptureError> {
        match self.capture.next_packet() {
            Ok(packet) => Ok(Some(packet.data.to_vec())),
            Err(pcap::Error::TimeoutExpired) => Ok(None),
            Err(e) => Err(CaptureError::Receive {
                reason: e.to_string(),
            }),
        }
    }
}

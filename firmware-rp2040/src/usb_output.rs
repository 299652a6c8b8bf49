//! USB HID mouse output implementation.

use defmt::Format;
use embassy_usb::class::hid::{HidWriter, ReportId, RequestHandler, State};
use embassy_usb::control::OutResponse;
use embassy_usb::Builder;
use mouse_core::{MouseSink, OutputError};
use mouse_proto::{ButtonMask, MouseButton};

use crate::config;

/// USB HID mouse report structure.
///
/// This matches the HID report descriptor defined below.
/// Total size: 4 bytes (buttons: 1, x: 1, y: 1, wheel: 1)
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Format)]
#[repr(C)]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 = middle)
    pub buttons: u8,
    /// Relative X movement (-127 to 127)
    pub x: i8,
    /// Relative Y movement (-127 to 127)
    pub y: i8,
    /// Scroll wheel delta (-127 to 127)
    pub wheel: i8,
}

impl MouseReport {
    /// Size of the report in bytes.
    pub const SIZE: usize = 4;

    /// Convert the report to bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; Self::SIZE] {
        [self.buttons, self.x as u8, self.y as u8, self.wheel as u8]
    }
}

/// Standard HID mouse report descriptor.
///
/// This descriptor defines a mouse with:
/// - 3 buttons (left, right, middle)
/// - X/Y relative displacement (signed 8-bit)
/// - Scroll wheel (signed 8-bit)
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    // --- Buttons (3 buttons + 5 bits padding) ---
    0x05, 0x09, //     Usage Page (Button)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x03, //     Usage Maximum (Button 3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x01, //     Input (Constant) - padding
    //
    // --- X/Y displacement ---
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    // --- Scroll wheel ---
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];

/// USB HID mouse output.
///
/// Wraps an embassy-usb HID writer and keeps the currently pressed
/// button set, so every motion report re-asserts held buttons and a
/// drag survives a chunked move.
pub struct UsbMouseOutput<'d> {
    writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4>,
    buttons: ButtonMask,
    ready: bool,
}

impl<'d> UsbMouseOutput<'d> {
    /// Create a new USB mouse output from the given HID writer.
    pub fn new(
        writer: HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4>,
    ) -> Self {
        Self {
            writer,
            buttons: ButtonMask::NONE,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }

    async fn send(&mut self, x: i8, y: i8, wheel: i8) -> Result<(), OutputError> {
        let report = MouseReport {
            buttons: (self.buttons & ButtonMask::REPORTABLE).raw(),
            x,
            y,
            wheel,
        };
        self.writer
            .write(&report.as_bytes())
            .await
            .map_err(|_| OutputError::Io)
    }
}

impl MouseSink for UsbMouseOutput<'_> {
    async fn press(&mut self, button: MouseButton) -> Result<(), OutputError> {
        self.buttons |= button.mask();
        self.send(0, 0, 0).await
    }

    async fn release(&mut self, button: MouseButton) -> Result<(), OutputError> {
        self.buttons &= !button.mask();
        self.send(0, 0, 0).await
    }

    async fn mouse_move(&mut self, dx: i8, dy: i8, wheel: i8) -> Result<(), OutputError> {
        self.send(dx, dy, wheel).await
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// HID request handler (handles SET_REPORT, etc.).
///
/// Currently a no-op handler since we don't handle output reports.
pub struct MouseRequestHandler;

impl RequestHandler for MouseRequestHandler {
    fn get_report(&mut self, _id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        None
    }

    fn set_report(&mut self, _id: ReportId, _data: &[u8]) -> OutResponse {
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, _id: Option<ReportId>, _duration_ms: u32) {}

    fn get_idle_ms(&mut self, _id: Option<ReportId>) -> Option<u32> {
        None
    }
}

/// Configure the USB HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_hid<'d>(
    builder: &mut Builder<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>>,
    state: &'d mut State<'d>,
) -> HidWriter<'d, embassy_rp::usb::Driver<'d, embassy_rp::peripherals::USB>, 4> {
    let hid_config = embassy_usb::class::hid::Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
        hid_subclass: embassy_usb::class::hid::HidSubclass::Boot,
        hid_boot_protocol: embassy_usb::class::hid::HidBootProtocol::Mouse,
    };

    embassy_usb::class::hid::HidWriter::new(builder, state, hid_config)
}

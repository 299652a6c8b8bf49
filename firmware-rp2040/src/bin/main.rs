#![no_std]
#![no_main]

use defmt::{error, info};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{UART1, USB};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_rp::usb::Driver;
use embassy_time::{Duration, Timer};
use embassy_usb::class::hid::State;
use embassy_usb::{Builder, Config as UsbConfig};
use portable_atomic::{AtomicBool, Ordering};
use static_cell::StaticCell;
use uart_to_mouse_rp2040::{
    config, configure_usb_hid, BridgeConfig, MouseBridge, SerialLink, UsbMouseOutput,
    DEFAULT_CONFIG, REPORT_LAYOUT,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<USB>;
});

/// Set by the link task once the host has completed a handshake.
/// The heartbeat task logs liveness only while this is set.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// USB device configuration buffers.
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// HID state.
static HID_STATE: StaticCell<State> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("UART-to-Mouse starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config::UART_BAUD;

    #[cfg(not(feature = "uart-flow-control"))]
    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );

    #[cfg(feature = "uart-flow-control")]
    let uart = Uart::new_with_rtscts(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.PIN_11, // RTS
        p.PIN_10, // CTS
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );

    let (tx, rx) = uart.split();
    let link = SerialLink::new(rx, tx);

    // --- USB Setup ---
    let usb_driver = Driver::new(p.USB, Irqs);

    let mut usb_config = UsbConfig::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100;
    usb_config.max_packet_size_0 = 64;

    let config_descriptor = CONFIG_DESCRIPTOR.init([0; 256]);
    let bos_descriptor = BOS_DESCRIPTOR.init([0; 256]);
    let msos_descriptor = MSOS_DESCRIPTOR.init([0; 256]);
    let control_buf = CONTROL_BUF.init([0; 64]);

    let mut builder = Builder::new(
        usb_driver,
        usb_config,
        config_descriptor,
        bos_descriptor,
        msos_descriptor,
        control_buf,
    );

    // Configure HID class
    let hid_state = HID_STATE.init(State::new());
    let hid_writer = configure_usb_hid(&mut builder, hid_state);

    // Build the USB device
    let usb_device = builder.build();

    // Create output
    let usb_output = UsbMouseOutput::new(hid_writer);

    // On-board LED mirrors the logical LED flag
    let led = Output::new(p.PIN_25, Level::Low);

    spawner.must_spawn(usb_task(usb_device));
    spawner.must_spawn(link_task(link, usb_output, led));
    spawner.must_spawn(heartbeat_task());

    info!("UART-to-Mouse initialized, waiting for host...");
}

/// USB device task - runs the USB stack.
#[embassy_executor::task]
async fn usb_task(mut device: embassy_usb::UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

/// Link task - reads command lines, runs them through the bridge, and
/// writes replies. Owns both UART directions so replies stay in order
/// with the commands that caused them.
#[embassy_executor::task]
async fn link_task(
    mut link: SerialLink<'static>,
    mut output: UsbMouseOutput<'static>,
    mut led: Output<'static>,
) {
    output.wait_ready().await;
    info!("USB HID mouse ready, accepting commands...");

    let mut bridge = MouseBridge::new(
        output,
        BridgeConfig {
            layout: REPORT_LAYOUT,
            ..DEFAULT_CONFIG
        },
    );

    loop {
        if let Err(e) = link.read_line().await {
            error!("Link error: {:?}", e);
            continue;
        }

        let outcome = bridge.handle_line(link.line()).await;
        match outcome {
            Ok(Some(reply)) => {
                if let Err(e) = link.send_reply(reply).await {
                    error!("Reply failed: {:?}", e);
                }
            }
            Ok(None) => {}
            // Dropped silently on the wire; the host sees no reply
            Err(e) => error!("Command dropped: {:?}", e),
        }

        SESSION_ACTIVE.store(bridge.session_active(), Ordering::Relaxed);
        if bridge.led_on() {
            led.set_high();
        } else {
            led.set_low();
        }
    }
}

/// Heartbeat task - periodic liveness log while a session is active.
#[embassy_executor::task]
async fn heartbeat_task() {
    loop {
        Timer::after(Duration::from_secs(config::HEARTBEAT_SECS)).await;
        if SESSION_ACTIVE.load(Ordering::Relaxed) {
            info!("Phase 5 active, USB HID output ready");
        }
    }
}

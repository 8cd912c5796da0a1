#![no_std]
#![no_main]

#[cfg(not(any(
    feature = "board-ttgo-t22-v1-1",
    feature = "board-heltec-v2-1",
    feature = "board-heltec-v3",
    feature = "board-xiao-esp32s3-sx1262",
    feature = "board-t-echo",
)))]
compile_error!("select the target board with exactly one board-* feature");

// Required for ESP-IDF bootloader compatibility
// Use explicit parameters to ensure correct efuse block revision values
esp_bootloader_esp_idf::esp_app_desc!(
    env!("CARGO_PKG_VERSION"),  // version
    env!("CARGO_PKG_NAME"),     // project_name
    "00:00:00",                 // build_time
    "2025-01-01",               // build_date
    "0.0.0",                    // idf_ver (not using IDF)
    0x10000,                    // mmu_page_size (64KB)
    0,                          // min_efuse_blk_rev_full (accept all)
    u16::MAX                    // max_efuse_blk_rev_full (accept all)
);

use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::gpio::{AnyPin, Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;
use log::{error, info};
use static_cell::StaticCell;

use mesh_board_variants::boards::BUILD_VARIANT;
use mesh_board_variants::config::version;
use mesh_board_variants::hal::{
    BatteryMonitor, ButtonWiring, DisplayWiring, GpsWiring, LedWiring, PeripheralPower,
    RadioWiring, SchedulerSeed,
};
use mesh_board_variants::tasks::{self, LedReceiver, LedSender, LED_CHANNEL};
use mesh_board_variants::variant::{ControllerFamily, GpioPin};
use mesh_board_variants::{select_build_variant, BoardVariant, ConfigError, REGISTRY};

// The chip feature and the selected board must agree
#[cfg(feature = "esp32")]
const _: () = match BUILD_VARIANT {
    Some(variant) => assert!(
        matches!(variant.controller, ControllerFamily::Esp32),
        "selected board is not an ESP32 board"
    ),
    None => {}
};

#[cfg(feature = "esp32s3")]
const _: () = match BUILD_VARIANT {
    Some(variant) => assert!(
        matches!(variant.controller, ControllerFamily::Esp32S3),
        "selected board is not an ESP32-S3 board"
    ),
    None => {}
};

/// Static executor for embassy
static EXECUTOR: StaticCell<esp_rtos::embassy::Executor> = StaticCell::new();

/// Unwrap a consumer view, halting boot on a board/consumer mismatch
fn require<T>(view: Result<T, ConfigError>, consumer: &str) -> T {
    match view {
        Ok(value) => value,
        Err(err) => {
            error!("{} cannot use this board: {}", consumer, err);
            panic!("board/consumer mismatch");
        }
    }
}

/// Claim a pin of the active variant as an output
fn output(pin: GpioPin, high: bool) -> Output<'static> {
    // SAFETY: pin numbers come from the validated active variant, which
    // assigns each exclusive pin to exactly one signal, and each signal is
    // claimed once during boot.
    let pin = unsafe { AnyPin::steal(pin.number()) };
    Output::new(pin, Level::from(high), OutputConfig::default())
}

/// Claim a pin of the active variant as an input
fn input(pin: GpioPin, pull_up: bool) -> Input<'static> {
    // SAFETY: see `output`
    let pin = unsafe { AnyPin::steal(pin.number()) };
    let pull = if pull_up { Pull::Up } else { Pull::None };
    Input::new(pin, InputConfig::default().with_pull(pull))
}

/// Log what each HAL consumer will read from the active variant
fn log_wiring(variant: &BoardVariant) {
    if let Some(radio) = require(RadioWiring::from_variant(variant), "radio") {
        info!(
            "radio {}: sck={} miso={} mosi={} cs={} reset={}",
            radio.family.name(),
            radio.spi.sck.number(),
            radio.spi.miso.number(),
            radio.spi.mosi.number(),
            radio.spi.cs.number(),
            radio.reset().number()
        );
    }
    if let Some(gps) = require(GpsWiring::from_variant(variant), "gps") {
        info!(
            "gps: rx={} tx={} uart{} @ {}",
            gps.rx.number(),
            gps.tx.number(),
            gps.serial.index(),
            gps.baud.get()
        );
    }
    if let Some(battery) = require(BatteryMonitor::from_variant(variant), "battery monitor") {
        info!(
            "battery: pin {} on ADC{} channel {}",
            battery.pin.number(),
            battery.adc.unit.number(),
            battery.adc.channel
        );
    }
    match require(DisplayWiring::from_variant(variant), "display") {
        Some(display) => info!("display: {:?}", display),
        None => info!("display: none"),
    }
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    info!(
        "mesh-board-variants {}.{}.{}",
        version::MAJOR,
        version::MINOR,
        version::PATCH
    );

    // Never drive hardware from an unvalidated description
    if let Err(err) = REGISTRY.validate_all() {
        error!("board registry self-check failed: {}", err);
        panic!("invalid board registry");
    }
    let variant = match select_build_variant() {
        Ok(variant) => variant,
        Err(err) => {
            error!("board selection failed: {}", err);
            panic!("no usable board variant");
        }
    };

    log_wiring(variant);

    // Power external peripherals before anything talks to them
    if let Some(rail) = require(PeripheralPower::from_variant(variant), "power") {
        core::mem::forget(output(rail.pin, rail.on_level_high()));
    }

    let led = require(LedWiring::from_variant(variant), "led")
        .map(|wiring| (output(wiring.pin, wiring.level_high(false)), wiring));
    let button = require(ButtonWiring::from_variant(variant), "button")
        .map(|wiring| input(wiring.pin, wiring.needs_pull_up));
    let seed = SchedulerSeed::from_variant(variant);

    // Initialise the RTOS scheduler with timer - MUST be done before any async operations
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let executor = EXECUTOR.init(esp_rtos::embassy::Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(async_main(spawner, led, button, seed));
    })
}

#[embassy_executor::task]
async fn async_main(
    spawner: Spawner,
    led: Option<(Output<'static>, LedWiring)>,
    button: Option<Input<'static>>,
    seed: SchedulerSeed,
) {
    let led_sender: Option<LedSender> = match led {
        Some((pin, wiring)) => {
            spawner.must_spawn(led_task(pin, wiring, LED_CHANNEL.receiver()));
            Some(LED_CHANNEL.sender())
        }
        None => None,
    };

    if let Some(button) = button {
        spawner.must_spawn(button_task(button, led_sender));
    }
    spawner.must_spawn(scheduler_task(seed, led_sender));
}

/// Task that flashes the status LED
#[embassy_executor::task]
async fn led_task(led: Output<'static>, wiring: LedWiring, receiver: LedReceiver) {
    tasks::led_task(led, wiring, receiver).await;
}

/// Task that watches the user button
#[embassy_executor::task]
async fn button_task(button: Input<'static>, led_sender: Option<LedSender>) {
    tasks::button_task(button, led_sender).await;
}

/// Task that fires the broadcast timers
#[embassy_executor::task]
async fn scheduler_task(seed: SchedulerSeed, led_sender: Option<LedSender>) {
    tasks::scheduler_task(seed, led_sender).await;
}

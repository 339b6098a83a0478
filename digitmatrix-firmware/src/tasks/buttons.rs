//! Button edge tasks
//!
//! Each button gets its own task waiting on the GPIO falling-edge
//! interrupt. The edge is stamped immediately and handed to the input task,
//! so queueing delay never shifts the debounce timing.

use defmt::*;

use digitmatrix_core::state::{ButtonEvent, ButtonPress};
use digitmatrix_core::traits::{InputPin, MonotonicClock};
use digitmatrix_hal_rp2040::{EmbassyClock, GpioInput};

use crate::channels::INPUT_CHANNEL;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut button: GpioInput<'static>, gpio: u8) {
    let Some(event) = ButtonEvent::from_gpio(gpio) else {
        error!("GPIO{} is not mapped to a button", gpio);
        return;
    };

    info!("Button task started on GPIO{} ({})", gpio, event);
    let clock = EmbassyClock;

    loop {
        button.wait_for_press().await;
        let press = ButtonPress::new(event, clock.now_us());

        if INPUT_CHANNEL.try_send(press).is_err() {
            trace!("GPIO{} edge dropped: input queue full", gpio);
        } else {
            trace!("GPIO{} edge at {} us ({})", gpio, press.at_us, button.level());
        }
    }
}

// SSD1306 128x32 OLED over Linux I2C, buffered; text via embedded-graphics.

use super::{DisplayAdapter, DisplayError, draw_text_row};
use crate::config::DisplayConfig;
use linux_embedded_hal::I2cdev;
use ssd1306::mode::{BufferedGraphicsMode, DisplayConfig as _};
use ssd1306::prelude::{DisplayRotation, DisplaySize128x32, I2CInterface};
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Panel =
    Ssd1306<I2CInterface<I2cdev>, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>;

pub struct OledDisplay {
    panel: Panel,
    line_height: u32,
}

impl OledDisplay {
    /// Open the I2C bus and initialise the panel. The handle lives for the whole process.
    pub fn open(config: &DisplayConfig) -> Result<Self, DisplayError> {
        let i2c = I2cdev::new(&config.i2c_bus).map_err(|e| DisplayError::Bus {
            path: config.i2c_bus.clone(),
            reason: e.to_string(),
        })?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, config.i2c_address);
        let mut panel = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel
            .init()
            .map_err(|e| DisplayError::Init(format!("{:?}", e)))?;
        tracing::info!(
            bus = %config.i2c_bus,
            address = %format!("{:#04x}", config.i2c_address),
            "OLED initialised"
        );
        Ok(Self {
            panel,
            line_height: config.line_height,
        })
    }
}

impl DisplayAdapter for OledDisplay {
    fn begin_frame(&mut self) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        Ok(())
    }

    fn draw_line(&mut self, row: usize, text: &str) -> Result<(), DisplayError> {
        draw_text_row(&mut self.panel, row, text, self.line_height)
            .map_err(|e| DisplayError::Draw(format!("{:?}", e)))
    }

    fn end_frame(&mut self) -> Result<(), DisplayError> {
        self.panel
            .flush()
            .map_err(|e| DisplayError::Flush(format!("{:?}", e)))
    }
}

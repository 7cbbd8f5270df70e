//! WASM bindings for DC-DC Designer.
//!
//! This module provides JavaScript-friendly bindings so that a browser
//! front end can size a converter and plot its waveforms.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDesigner } from 'dcdc_designer';
//!
//! await init();
//!
//! // Frequency in kHz, ripple in percent, as on the input form
//! const design = new WasmDesigner("Buck", 12, 5, 2, 500, 0.9, 1, 30);
//!
//! const t = design.time();
//! const il = design.waveform("inductor_current");
//! console.log(design.duty_cycle, design.inductance);
//! ```

use wasm_bindgen::prelude::*;

use crate::converter::{ConverterSpec, OperatingPoint, Topology};
use crate::persist::DesignRecord;
use crate::sizing::{size, DesignResult};
use crate::waveform::{synthesize, Channel, Waveforms};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: crate::error::DesignerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A sized converter design with its waveforms.
#[wasm_bindgen]
pub struct WasmDesigner {
    result: DesignResult,
    waveforms: Waveforms,
}

#[wasm_bindgen]
impl WasmDesigner {
    /// Size a converter from form values.
    ///
    /// # Arguments
    /// * `topology` - "Buck", "Boost" or "Buck-Boost"
    /// * `fsw_khz` - Switching frequency in kHz
    /// * `voltage_ripple_pct` / `current_ripple_pct` - Ripple targets in percent
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        topology: &str,
        vin: f64,
        vout: f64,
        iout: f64,
        fsw_khz: f64,
        efficiency: f64,
        voltage_ripple_pct: f64,
        current_ripple_pct: f64,
    ) -> Result<WasmDesigner, JsValue> {
        let topology: Topology = topology.parse().map_err(to_js)?;
        let point = OperatingPoint {
            vin,
            vout,
            iout,
            fsw: fsw_khz * 1e3,
            efficiency,
            voltage_ripple: voltage_ripple_pct / 100.0,
            current_ripple: current_ripple_pct / 100.0,
        };
        let spec = ConverterSpec::new(topology, point).map_err(to_js)?;
        let result = size(&spec).map_err(to_js)?;
        Ok(Self::from_result(result))
    }

    /// Restore a design from its JSON record.
    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<WasmDesigner, JsValue> {
        let record = DesignRecord::from_json(json).map_err(to_js)?;
        let result = record.to_design().map_err(to_js)?;
        Ok(Self::from_result(result))
    }

    /// Serialize the design as a JSON record.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        DesignRecord::from_design(&self.result).to_json().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn duty_cycle(&self) -> f64 {
        self.result.duty_cycle()
    }

    /// Inductance in henries.
    #[wasm_bindgen(getter)]
    pub fn inductance(&self) -> f64 {
        self.result.inductance()
    }

    /// Capacitance in farads.
    #[wasm_bindgen(getter)]
    pub fn capacitance(&self) -> f64 {
        self.result.capacitance()
    }

    #[wasm_bindgen(getter)]
    pub fn input_current(&self) -> f64 {
        self.result.input_current()
    }

    #[wasm_bindgen(getter)]
    pub fn inductor_current_avg(&self) -> f64 {
        self.result.inductor_current_avg()
    }

    #[wasm_bindgen(getter)]
    pub fn inductor_current_peak(&self) -> f64 {
        self.result.inductor_current_peak()
    }

    #[wasm_bindgen(getter)]
    pub fn voltage_ripple(&self) -> f64 {
        self.result.voltage_ripple()
    }

    #[wasm_bindgen(getter)]
    pub fn current_ripple(&self) -> f64 {
        self.result.current_ripple()
    }

    /// The plain-text design report.
    #[wasm_bindgen]
    pub fn report(&self) -> String {
        crate::report::Report::new(&self.result).to_string()
    }

    /// Sample times in seconds.
    #[wasm_bindgen]
    pub fn time(&self) -> Vec<f64> {
        self.waveforms.time().to_vec()
    }

    /// Samples of one channel, e.g. "inductor_current".
    #[wasm_bindgen]
    pub fn waveform(&self, channel: &str) -> Result<Vec<f64>, JsValue> {
        let channel: Channel = channel.parse().map_err(to_js)?;
        Ok(self
            .waveforms
            .values(channel)
            .map(<[f64]>::to_vec)
            .unwrap_or_default())
    }
}

impl WasmDesigner {
    fn from_result(result: DesignResult) -> Self {
        let waveforms = synthesize(&result, Channel::ALL);
        Self { result, waveforms }
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

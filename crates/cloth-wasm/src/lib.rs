use cloth_core::forces::wind::Wind;
use cloth_core::presets::QualityPreset;
use cloth_core::simulation::ClothSimulation;
use cloth_core::timestep::FixedTimestep;
use wasm_bindgen::prelude::*;

const POINT_FIXED: u32 = 1;
const POINT_DRAGGED: u32 = 2;

/// GPU-compatible point: 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuPoint {
    position: [f32; 2], // 8 bytes, render position
    flags: u32,         // 4 bytes, POINT_FIXED | POINT_DRAGGED
    _pad: u32,          // 4 bytes
}

/// GPU-compatible spring segment: 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuSpring {
    a: [f32; 2],  // 8 bytes
    b: [f32; 2],  // 8 bytes
    stretch: f32, // 4 bytes
    broken: u32,  // 4 bytes
}

#[wasm_bindgen]
pub struct ClothWorld {
    sim: ClothSimulation,
    clock: FixedTimestep,
    wind: Wind,
    point_buffer: Vec<GpuPoint>,
    spring_buffer: Vec<GpuSpring>,
}

#[wasm_bindgen]
impl ClothWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize) -> ClothWorld {
        let sim = ClothSimulation::with_resolution(resolution);
        web_sys::console::log_1(
            &format!(
                "WASM ClothWorld created: {}x{} points, {} springs",
                sim.width(),
                sim.height(),
                sim.springs().len()
            )
            .into(),
        );

        let mut world = ClothWorld {
            sim,
            clock: FixedTimestep::default(),
            wind: Wind::default(),
            point_buffer: Vec::new(),
            spring_buffer: Vec::new(),
        };
        world.write_gpu_output();
        world
    }

    /// Bank `elapsed` seconds, run every whole step it buys, and refresh the
    /// buffers. Returns the milliseconds spent.
    #[wasm_bindgen]
    pub fn frame(&mut self, elapsed: f32) -> f32 {
        let start = js_sys::Date::now();
        self.clock.advance(elapsed);
        while self.clock.consume_step() {
            let gust = self.wind.advance(self.clock.step);
            self.sim.apply_external_force(gust.x, gust.y);
            let stats = self.sim.update(self.clock.step, None);
            if stats.springs_broken > 0 {
                web_sys::console::log_1(&format!("{} springs tore", stats.springs_broken).into());
            }
        }
        self.sim.interpolate(self.clock.alpha());
        self.write_gpu_output();
        (js_sys::Date::now() - start) as f32
    }

    /// Returns the grabbed point index, or -1 when nothing is in reach.
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> i32 {
        self.sim.begin_drag(x, y).map_or(-1, |i| i as i32)
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.sim.update_drag(x, y);
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) {
        self.sim.end_drag();
    }

    #[wasm_bindgen]
    pub fn set_gravity(&mut self, value: f32) {
        self.sim.set_gravity(value);
    }

    #[wasm_bindgen]
    pub fn set_stiffness(&mut self, value: f32) {
        self.sim.set_stiffness(value);
    }

    #[wasm_bindgen]
    pub fn set_damping(&mut self, value: f32) {
        self.sim.set_damping(value);
    }

    #[wasm_bindgen]
    pub fn set_max_stretch(&mut self, ratio: f32) {
        self.sim.set_max_stretch(ratio);
    }

    #[wasm_bindgen]
    pub fn set_wires(&mut self, visible: bool) {
        self.sim.set_wire_visibility(visible);
    }

    #[wasm_bindgen]
    pub fn wires_visible(&self) -> bool {
        self.sim.wire_visibility()
    }

    #[wasm_bindgen]
    pub fn set_resolution(&mut self, resolution: usize) {
        self.sim.rebuild_with_resolution(resolution);
        self.clock.reset();
        self.write_gpu_output();
    }

    /// 0 = high, 1 = medium, anything else = low.
    #[wasm_bindgen]
    pub fn apply_preset(&mut self, preset: u32) {
        let preset = match preset {
            0 => QualityPreset::HIGH,
            1 => QualityPreset::MEDIUM,
            _ => QualityPreset::LOW,
        };
        self.sim.apply_preset(&preset);
        self.clock.reset();
        self.write_gpu_output();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.sim.reset();
        self.clock.reset();
        self.wind.time = 0.0;
        self.write_gpu_output();
    }

    #[wasm_bindgen]
    pub fn set_wind(&mut self, amplitude: f32, frequency: f32) {
        self.wind.amplitude = amplitude;
        self.wind.frequency = frequency;
    }

    #[wasm_bindgen]
    pub fn width(&self) -> usize {
        self.sim.width()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> usize {
        self.sim.height()
    }

    #[wasm_bindgen]
    pub fn point_count(&self) -> usize {
        self.point_buffer.len()
    }

    #[wasm_bindgen]
    pub fn spring_count(&self) -> usize {
        self.spring_buffer.len()
    }

    #[wasm_bindgen]
    pub fn broken_spring_count(&self) -> usize {
        self.sim.broken_spring_count()
    }

    #[wasm_bindgen]
    pub fn get_point_buffer_ptr(&self) -> *const f32 {
        self.point_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_point_buffer_byte_length(&self) -> usize {
        std::mem::size_of_val(self.point_buffer.as_slice())
    }

    #[wasm_bindgen]
    pub fn get_spring_buffer_ptr(&self) -> *const f32 {
        self.spring_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_spring_buffer_byte_length(&self) -> usize {
        std::mem::size_of_val(self.spring_buffer.as_slice())
    }
}

impl ClothWorld {
    fn write_gpu_output(&mut self) {
        let snapshot = self.sim.snapshot();

        self.point_buffer.clear();
        self.point_buffer.extend(snapshot.points.iter().map(|p| {
            let mut flags = 0;
            if p.fixed {
                flags |= POINT_FIXED;
            }
            if p.dragged {
                flags |= POINT_DRAGGED;
            }
            GpuPoint { position: p.position.to_array(), flags, _pad: 0 }
        }));

        // Segments are drawn from render positions.
        let render = &self.sim.points().render_position;
        self.spring_buffer.clear();
        self.spring_buffer.extend(snapshot.springs.iter().map(|s| GpuSpring {
            a: render[s.a].to_array(),
            b: render[s.b].to_array(),
            stretch: s.stretch,
            broken: s.broken as u32,
        }));
    }
}

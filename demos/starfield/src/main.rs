use stardust_ngin::{
    DeviceEvent, Key, NamedKey, Quaternion, Rotation3, WindowEvent,
    context::{Context, InitContext},
    data_structures::batch::InstanceBatch,
    flow::{FlowConsturctor, GraphicsFlow, Out},
    render::Render,
    resources::{color_from_hex, create_material, create_model, geometry::box_geometry},
};

use crate::field::{Earth, SPREAD, STAR_COUNT, StarField};

mod field;

/// Shared app state: is the space key currently held?
#[derive(Default)]
struct State {
    is_down: bool,
}

/// 300 stars sharing one 0.2-unit box geometry and one yellow material.
///
/// This flow is the point of the whole demo: `Stars::new` creates the mesh
/// and material exactly once, and the GPU draws all 300 copies from a single
/// instanced draw call.
struct Stars {
    field: StarField,
    batch: InstanceBatch,
}

impl Stars {
    async fn new(ctx: &InitContext) -> Stars {
        let geometry = box_geometry(0.2, 0.2, 0.2);
        let material = create_material(&ctx.device, "star", color_from_hex(0xffec50));
        let model = create_model(&ctx.device, "star", &geometry, material);

        let mut rng = rand::thread_rng();
        let field = StarField::scattered(&mut rng, STAR_COUNT, SPREAD);

        let mut batch = InstanceBatch::new(&ctx.device, model, STAR_COUNT);
        Self::sync_instances(&mut batch, &field);
        batch.write_to_buffer(&ctx.queue);

        Stars { field, batch }
    }

    fn sync_instances(batch: &mut InstanceBatch, field: &StarField) {
        for (instance, position) in batch.instances.iter_mut().zip(&field.positions) {
            instance.position = *position;
        }
    }
}

impl GraphicsFlow<State> for Stars {
    fn on_init(&mut self, _: &mut Context, _: &mut State) -> Out {
        Out::Empty
    }

    fn on_update(&mut self, ctx: &Context, state: &mut State, _: std::time::Duration) -> Out {
        if state.is_down {
            self.field.advance();
            Self::sync_instances(&mut self.batch, &self.field);
            self.batch.write_to_buffer(&ctx.queue);
        }
        Out::Empty
    }

    fn on_device_events(&mut self, _: &Context, _: &mut State, _: &DeviceEvent) -> Out {
        Out::Empty
    }

    fn on_window_events(&mut self, _: &Context, state: &mut State, event: &WindowEvent) -> Out {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            match (&event.logical_key, event.state.is_pressed()) {
                (Key::Named(NamedKey::Space), true) => state.is_down = true,
                (_, false) => state.is_down = false,
                _ => (),
            }
        }
        Out::Empty
    }

    fn on_render(&self) -> Render<'_> {
        Render::from(&self.batch)
    }
}

/// One 5-unit blue box that spins around its y axis, key held or not.
struct Globe {
    earth: Earth,
    batch: InstanceBatch,
}

impl Globe {
    async fn new(ctx: &InitContext) -> Globe {
        let geometry = box_geometry(5.0, 5.0, 5.0);
        let material = create_material(&ctx.device, "earth", color_from_hex(0x0000ff));
        let model = create_model(&ctx.device, "earth", &geometry, material);
        let batch = InstanceBatch::new(&ctx.device, model, 1);

        Globe {
            earth: Earth::new(),
            batch,
        }
    }
}

impl GraphicsFlow<State> for Globe {
    fn on_init(&mut self, _: &mut Context, _: &mut State) -> Out {
        Out::Empty
    }

    fn on_update(&mut self, ctx: &Context, _: &mut State, _: std::time::Duration) -> Out {
        self.earth.advance();
        self.batch.instances[0].rotation =
            Quaternion::from_angle_y(self.earth.angle);
        self.batch.write_to_buffer(&ctx.queue);
        Out::Empty
    }

    fn on_device_events(&mut self, _: &Context, _: &mut State, _: &DeviceEvent) -> Out {
        Out::Empty
    }

    fn on_window_events(&mut self, _: &Context, _: &mut State, _: &WindowEvent) -> Out {
        Out::Empty
    }

    fn on_render(&self) -> Render<'_> {
        Render::from(&self.batch)
    }
}

fn main() {
    let stars: FlowConsturctor<State> = Box::new(|ctx| {
        Box::pin(async move { Box::new(Stars::new(&ctx).await) as Box<dyn GraphicsFlow<_>> })
    });
    let globe: FlowConsturctor<State> = Box::new(|ctx| {
        Box::pin(async move { Box::new(Globe::new(&ctx).await) as Box<dyn GraphicsFlow<_>> })
    });

    let _ = stardust_ngin::flow::run(vec![stars, globe]);
}

use stardust_ngin::{
    context::Context,
    flow::{FlowConsturctor, GraphicsFlow, Out},
    render::Render,
};
use wgpu::Color;

use crate::common::test_utils::State;

mod common;

struct ProbeFlow;

#[cfg(feature = "integration-tests")]
impl GraphicsFlow<State> for ProbeFlow {
    fn on_init(&mut self, ctx: &mut Context, state: &mut State) -> Out {
        ctx.clear_colour = Color::TRANSPARENT;
        assert_eq!(state.frame_counter(), 0);
        assert_eq!(state.init_invocations(), 0);
        assert_eq!(state.update_invocations(), 0);

        state.init();
        Out::Empty
    }

    fn on_update(&mut self, _: &Context, state: &mut State, _: std::time::Duration) -> Out {
        assert_eq!(state.frame_counter(), state.update_invocations());
        assert_eq!(state.init_invocations(), 1);
        state.frame();
        state.update();

        if state.frame_counter() >= 8 {
            Out::Exit
        } else {
            Out::Empty
        }
    }

    fn on_device_events(
        &mut self,
        _: &Context,
        _: &mut State,
        _: &stardust_ngin::DeviceEvent,
    ) -> Out {
        Out::Empty
    }

    fn on_window_events(
        &mut self,
        _: &Context,
        _: &mut State,
        _: &stardust_ngin::WindowEvent,
    ) -> Out {
        Out::Empty
    }

    fn on_render(&self) -> Render<'_> {
        Render::None
    }
}

#[test]
#[cfg(feature = "integration-tests")]
fn hooks_fire_in_lifecycle_order_until_exit() {
    let probe_constructor: FlowConsturctor<State> =
        Box::new(|_| Box::pin(async move { Box::new(ProbeFlow) as Box<dyn GraphicsFlow<_>> }));

    match stardust_ngin::flow::run(vec![probe_constructor]) {
        Ok(_) => (),
        Err(e) => {
            println!("{}", e);
            panic!("{}", e);
        }
    }
}

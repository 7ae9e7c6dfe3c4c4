//! Shared state for the lifecycle integration tests: plain counters that the
//! probe flow bumps from its hooks so the test can assert invocation order.

#[derive(Default)]
pub struct State {
    frame_counter: u32,
    init_invocations: u32,
    update_invocations: u32,
}

impl State {
    pub fn frame(&mut self) {
        self.frame_counter += 1;
    }

    pub fn init(&mut self) {
        self.init_invocations += 1;
    }

    pub fn update(&mut self) {
        self.update_invocations += 1;
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn init_invocations(&self) -> u32 {
        self.init_invocations
    }

    pub fn update_invocations(&self) -> u32 {
        self.update_invocations
    }
}

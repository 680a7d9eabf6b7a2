use crate::apps::HostedApp;
use crate::config::Config;
use crate::models::ManagerState;
use crate::{Command, CommandPipe, Manager, Surface};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

enum Input {
    Command(Command),
    CommandsClosed,
    TimerDue,
    SurfaceEvents,
}

impl<C: Config, SURFACE: Surface, A: HostedApp> Manager<C, SURFACE, A> {
    /// Drive the manager from `command_pipe` and its own timers, publishing a
    /// fresh `ManagerState` to `states` whenever it changes. Returns once the
    /// pipe is closed and nothing is left pending.
    pub async fn event_loop(
        mut self,
        mut command_pipe: CommandPipe,
        states: mpsc::UnboundedSender<ManagerState>,
    ) -> Self {
        let started = Instant::now();
        let mut commands_open = true;
        let mut last_state: Option<ManagerState> = None;
        let mut event_buffer = vec![];

        loop {
            let current = self.manager_state();
            if last_state.as_ref() != Some(&current) {
                states.send(current.clone()).ok();
                last_state = Some(current);
            }
            self.surface.flush();

            event_buffer.append(&mut self.surface.get_next_events());
            if !commands_open && event_buffer.is_empty() && self.state.timers.is_empty() {
                break;
            }

            let next_deadline = self.state.timers.next_deadline();
            let wake = started + next_deadline.unwrap_or_default();
            let input = tokio::select! {
                cmd = command_pipe.read_command(), if commands_open && event_buffer.is_empty() => {
                    cmd.map_or(Input::CommandsClosed, Input::Command)
                }
                () = sleep_until(wake), if next_deadline.is_some() && event_buffer.is_empty() => {
                    Input::TimerDue
                }
                else => Input::SurfaceEvents,
            };

            // Timers that came due first see the state they were scheduled against.
            let mut needs_update = self.tick(started.elapsed());
            match input {
                Input::Command(cmd) => {
                    needs_update = self.command_handler(&cmd) || needs_update;
                }
                Input::CommandsClosed => {
                    tracing::debug!("Command pipe closed");
                    commands_open = false;
                }
                Input::TimerDue => {}
                Input::SurfaceEvents => {
                    for event in event_buffer.drain(..) {
                        needs_update = self.display_event_handler(event) || needs_update;
                    }
                }
            }

            if needs_update {
                self.update_windows();
            }
            event_buffer.append(&mut self.flush_actions());
        }
        self
    }
}

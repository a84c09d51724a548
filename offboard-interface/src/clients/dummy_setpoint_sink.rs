use std::sync::Mutex;

use crate::{error::Error, traits::SetpointSink, Setpoint};

/// Records every setpoint it receives. For debug or tests.
#[derive(Debug, Default)]
pub struct DummySetpointSink {
    sent: Mutex<Vec<Setpoint>>,
}

impl DummySetpointSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setpoints in the order they were sent.
    pub fn sent_setpoints(&self) -> Vec<Setpoint> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_setpoint(&self) -> Option<Setpoint> {
        self.sent.lock().unwrap().last().copied()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl SetpointSink for DummySetpointSink {
    fn send_setpoint(&self, setpoint: &Setpoint) -> Result<(), Error> {
        self.sent.lock().unwrap().push(*setpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn test_record() {
        let sink = DummySetpointSink::new();
        assert!(sink.last_setpoint().is_none());
        sink.send_setpoint(&Setpoint::Position(Vector3::new(1.0, 2.0, 3.0)))
            .unwrap();
        sink.send_setpoint(&Setpoint::Velocity(Vector3::new(0.1, 0.0, -0.1)))
            .unwrap();
        assert_eq!(
            sink.sent_setpoints(),
            vec![
                Setpoint::Position(Vector3::new(1.0, 2.0, 3.0)),
                Setpoint::Velocity(Vector3::new(0.1, 0.0, -0.1)),
            ]
        );
        assert_eq!(
            sink.last_setpoint(),
            Some(Setpoint::Velocity(Vector3::new(0.1, 0.0, -0.1)))
        );
        sink.clear();
        assert!(sink.sent_setpoints().is_empty());
    }
}

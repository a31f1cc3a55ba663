use crate::error::MouseError;
use crate::heading::Heading;
use crate::location::Location;

/// The hardware (or simulator) a navigator drives.
///
/// All calls are synchronous: a sensor read returns the current reading, and an actuator call returns once the motion has finished.
/// Sensor readings are relative to the direction the mouse faces.
pub trait Mouse {
    /// Whether a wall is on the mouse's left.
    fn wall_left(&mut self) -> Result<bool, MouseError>;
    /// Whether a wall is directly ahead.
    fn wall_front(&mut self) -> Result<bool, MouseError>;
    /// Whether a wall is on the mouse's right.
    fn wall_right(&mut self) -> Result<bool, MouseError>;
    /// Rotate 90° clockwise in place.
    fn turn_right(&mut self) -> Result<(), MouseError>;
    /// Rotate 90° counterclockwise in place.
    fn turn_left(&mut self) -> Result<(), MouseError>;
    /// Drive forward exactly one cell.
    fn move_forward(&mut self) -> Result<(), MouseError>;

    /// Report a discovered wall on the `heading` side of `location` to a display.
    ///
    /// Purely informational; the default does nothing.
    fn mark_wall(&mut self, location: Location, heading: Heading) {
        let _ = (location, heading);
    }
}

impl<M: Mouse + ?Sized> Mouse for &mut M {
    fn wall_left(&mut self) -> Result<bool, MouseError> {
        (**self).wall_left()
    }

    fn wall_front(&mut self) -> Result<bool, MouseError> {
        (**self).wall_front()
    }

    fn wall_right(&mut self) -> Result<bool, MouseError> {
        (**self).wall_right()
    }

    fn turn_right(&mut self) -> Result<(), MouseError> {
        (**self).turn_right()
    }

    fn turn_left(&mut self) -> Result<(), MouseError> {
        (**self).turn_left()
    }

    fn move_forward(&mut self) -> Result<(), MouseError> {
        (**self).move_forward()
    }

    fn mark_wall(&mut self, location: Location, heading: Heading) {
        (**self).mark_wall(location, heading)
    }
}

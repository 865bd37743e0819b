pub mod lecturer_picker;

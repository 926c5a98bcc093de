#[derive(thiserror::Error, Debug)]
pub enum JSError {
    /// Receiver was `undefined` or `null`.
    #[error("can't convert {value} to object")]
    TypeConversionError { value: &'static str },

    #[error("Array.prototype.{method}: callback is not a function")]
    CallbackTypeError { method: String },

    #[error("reduce of empty array with no initial value")]
    EmptyReductionError,

    #[error("Type error: {message}")]
    TypeError { message: String },

    #[error("Range error: {message}")]
    RangeError { message: String },

    /// A value raised by a user callback.
    #[error("Thrown value: {value:?}")]
    Throw { value: crate::core::Value },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("std::io error: {0}")]
    IoError(#[from] std::io::Error),
}

impl JSError {
    /// Message shown to the end user, without the variant prefix used by `Display`
    /// for generic type errors.
    pub fn user_message(&self) -> String {
        match self {
            JSError::TypeError { message } => format!("TypeError: {message}"),
            JSError::RangeError { message } => format!("RangeError: {message}"),
            JSError::Throw { value } => format!("Uncaught {}", crate::js_console::format_value(value)),
            JSError::IoError(err) => format!("Error: {err}"),
            _ => self.to_string(),
        }
    }
}


#[macro_export]
macro_rules! raise_type_error {
    ($msg:expr) => {
        $crate::JSError::TypeError { message: $msg.to_string() }
    };
}

#[macro_export]
macro_rules! raise_range_error {
    ($msg:expr) => {
        $crate::JSError::RangeError { message: $msg.to_string() }
    };
}

#[macro_export]
macro_rules! raise_callback_error {
    ($method:expr) => {
        $crate::JSError::CallbackTypeError {
            method: $method.to_string(),
        }
    };
}

// Macro that names the enclosing function. Used in trace output so the log
// line points at the dispatch site rather than the logging helper.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // remove the trailing "::f"
        &name[..name.len() - 3]
    }};
}

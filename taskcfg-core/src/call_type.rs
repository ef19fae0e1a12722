use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How the executor dispatches the action call.
///
/// `Display` yields the labels the task executor tooling has always printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    #[strum(serialize = "static call")]
    StaticCall,
    #[strum(serialize = "dynamic call")]
    DynamicCall,
    #[strum(serialize = "static delegateCall")]
    StaticDelegateCall,
    #[strum(serialize = "dynamic delegateCall")]
    DynamicDelegateCall,
}

impl CallType {
    /// Map the call-type digit. Anything but `1`, `2` or `3` is a static delegate call.
    pub fn from_digit(digit: char) -> Self {
        match digit {
            '1' => CallType::DynamicDelegateCall,
            '2' => CallType::StaticCall,
            '3' => CallType::DynamicCall,
            _ => CallType::StaticDelegateCall,
        }
    }

    #[inline]
    pub fn is_delegate(self) -> bool {
        matches!(self, CallType::StaticDelegateCall | CallType::DynamicDelegateCall)
    }

    /// Dynamic calls have arguments replaced from the local stack.
    #[inline]
    pub fn is_dynamic(self) -> bool {
        matches!(self, CallType::DynamicCall | CallType::DynamicDelegateCall)
    }
}

pub fn decode_call_type(digit: char) -> CallType {
    let call_type = CallType::from_digit(digit);
    log::debug!("call type digit {:?} -> {}", digit, call_type);
    call_type
}

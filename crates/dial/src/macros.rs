/// Adds range-checked construction to a `u8` tuple newtype.
#[macro_export]
macro_rules! impl_bounded_newtype {
    ($name:ty, $min:expr, $max:expr) => {
        impl $name {
            pub const MIN: u8 = $min;
            pub const MAX: u8 = $max;

            pub fn new(value: u8) -> Option<Self> {
                ($min..=$max).contains(&value).then_some(Self(value))
            }

            pub fn get(self) -> u8 {
                self.0
            }
        }
    };
}

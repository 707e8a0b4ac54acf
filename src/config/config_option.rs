/// A configurable value, with the bounds a value is expected to fall within.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by the cli.
    pub name: &'static str,

    /// The least acceptable value.
    pub min: T,

    /// The greatest acceptable value.
    pub max: T,

    /// The value of the option.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    /// The least and greatest acceptable values, as a pair.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        let (min, max) = self.min_max();
        match min <= value && value <= max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn out_of_bounds() {
        let mut lean = ConfigOption {
            name: "polarity_lean",
            min: 0.0,
            max: 1.0,
            value: 1.0,
        };

        assert!(!lean.set(1.5));
        assert_eq!(lean.value, 1.0);

        assert!(lean.set(0.25));
        assert_eq!(lean.value, 0.25);
    }
}

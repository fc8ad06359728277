use rand::{SeedableRng as _, distr::Distribution as _, rngs::StdRng};

use crate::error::SortError;

/// A trait for generating random sequences of integers
pub trait RandomArray: Sized {
    /// Overwrite every element of `slice` with a uniform sample from `0..modulus`
    fn fill_random(
        slice: &mut [Self],
        modulus: Self,
        rng: &mut impl rand::Rng,
    ) -> Result<(), SortError>;

    /// Create a vector of `size` elements, each sampled uniformly from `0..modulus`
    fn random_array(
        size: usize,
        modulus: Self,
        rng: &mut impl rand::Rng,
    ) -> Result<Vec<Self>, SortError>;
}

macro_rules! impl_for_integers {
    ($($type:ty),*) => {
        $(
            impl_for_integers!(@single $type);
        )*
    };
    (@single $type:ty) => {
        impl RandomArray for $type {
            fn fill_random(
                slice: &mut [$type],
                modulus: $type,
                rng: &mut impl rand::Rng,
            ) -> Result<(), SortError> {
                let distribution = rand::distr::Uniform::new(0, modulus).map_err(|_| {
                    SortError::invalid_input(format!("modulus must be positive, got {modulus}"))
                })?;

                for element in slice.iter_mut() {
                    *element = distribution.sample(rng);
                }

                Ok(())
            }

            fn random_array(
                size: usize,
                modulus: $type,
                rng: &mut impl rand::Rng,
            ) -> Result<Vec<$type>, SortError> {
                let mut values = Vec::new();
                values
                    .try_reserve_exact(size)
                    .map_err(|_| SortError::AllocationFailure { requested: size })?;
                values.resize(size, 0);

                Self::fill_random(&mut values, modulus, rng)?;
                Ok(values)
            }
        }
    }
}

// Signed integer types the generator supports
impl_for_integers!(i16, i32, i64);

/// Create the rng for a run, seeded from `seed` if given and from the os otherwise
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            log::debug!("No seed provided, generating one using system rng");
            StdRng::from_os_rng()
        }
    }
}

//! Motivational quote source
//!
//! Static list of quotes shown by the mascot bubble. The list is fixed at
//! compile time; selection is a uniform draw over the whole list.

use rand::Rng;

/// One motivational quote with its attribution.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 13] = [
    Quote {
        text: "Education is the passport to the future.",
        author: "Malcolm X",
    },
    Quote {
        text: "The more that you read, the more things you will know.",
        author: "Dr. Seuss",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "Success is not final, failure is not fatal.",
        author: "Winston Churchill",
    },
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Learning never exhausts the mind.",
        author: "Leonardo da Vinci",
    },
    Quote {
        text: "Start where you are. Use what you have. Do what you can.",
        author: "Arthur Ashe",
    },
    Quote {
        text: "Your attitude determines your direction.",
        author: "Unknown",
    },
    Quote {
        text: "Dream big and dare to fail.",
        author: "Norman Vaughan",
    },
    Quote {
        text: "Every day is a chance to be better.",
        author: "Unknown",
    },
    Quote {
        text: "Be the change you wish to see in the world.",
        author: "Mahatma Gandhi",
    },
    Quote {
        text: "With God, all things are possible.",
        author: "Matthew 19:26",
    },
    Quote {
        text: "Faith is taking the first step even when you can't see the whole staircase.",
        author: "Martin Luther King Jr.",
    },
];

/// Draw a uniformly random quote from the fixed list.
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    QUOTES[rng.gen_range(0..QUOTES.len())]
}

/// Placeholder quote used before the first draw.
pub fn default_quote() -> Quote {
    QUOTES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    // Every draw must come from the fixed list.
    fn test_draws_belong_to_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let quote = pick_random(&mut rng);
            assert!(QUOTES.contains(&quote));
        }
    }

    #[test]
    // Draws are reproducible under a fixed seed.
    fn test_draws_are_deterministic_given_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(pick_random(&mut a), pick_random(&mut b));
        }
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(default_quote(), QUOTES[0]);
    }
}

/// Foods eaten within a rolling window. Eating restarts the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComboTracker {
    count: u32,
    timer: u32,
    window_frames: u32,
    threshold: u32,
    bonus_multiplier: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComboResult {
    pub count: u32,
    pub bonus: u32,
}

impl ComboResult {
    pub fn triggered(&self) -> bool {
        self.bonus > 0
    }
}

impl ComboTracker {
    pub fn new(window_frames: u32, threshold: u32, bonus_multiplier: u32) -> Self {
        Self {
            count: 0,
            timer: 0,
            window_frames,
            threshold: threshold.max(1),
            bonus_multiplier,
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.timer = 0;
    }

    pub fn on_food_eaten(&mut self) -> ComboResult {
        if self.timer > 0 {
            self.count += 1;
        } else {
            self.count = 1;
        }
        self.timer = self.window_frames;

        let bonus = if self.count % self.threshold == 0 {
            self.count * self.bonus_multiplier
        } else {
            0
        };
        ComboResult {
            count: self.count,
            bonus,
        }
    }

    /// Counts the window down. The count clears on the same tick the timer reaches zero.
    pub fn tick(&mut self) {
        if self.timer > 0 {
            self.timer -= 1;
        }
        if self.timer == 0 {
            self.count = 0;
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ComboTracker {
        ComboTracker::new(1800, 5, 10)
    }

    #[test]
    fn test_fifth_food_triggers_bonus() {
        let mut combo = tracker();
        for expected in 1..=4 {
            let result = combo.on_food_eaten();
            assert_eq!(result.count, expected);
            assert_eq!(result.bonus, 0);
            for _ in 0..100 {
                combo.tick();
            }
        }
        let result = combo.on_food_eaten();
        assert_eq!(result, ComboResult { count: 5, bonus: 50 });
        assert!(result.triggered());
    }

    #[test]
    fn test_tenth_food_bonus_is_100() {
        let mut combo = tracker();
        let mut last = None;
        for _ in 0..10 {
            last = Some(combo.on_food_eaten());
            combo.tick();
        }
        assert_eq!(last, Some(ComboResult { count: 10, bonus: 100 }));
    }

    #[test]
    fn test_window_clears_on_exact_tick() {
        let mut combo = tracker();
        combo.on_food_eaten();
        for _ in 0..1799 {
            combo.tick();
        }
        assert_eq!(combo.timer(), 1);
        assert_eq!(combo.count(), 1);

        combo.tick();
        assert_eq!(combo.timer(), 0);
        assert_eq!(combo.count(), 0);
    }

    #[test]
    fn test_expired_window_restarts_at_one() {
        let mut combo = tracker();
        combo.on_food_eaten();
        combo.on_food_eaten();
        for _ in 0..1800 {
            combo.tick();
        }
        assert_eq!(combo.on_food_eaten().count, 1);
    }

    #[test]
    fn test_eating_refreshes_window() {
        let mut combo = tracker();
        combo.on_food_eaten();
        for _ in 0..1000 {
            combo.tick();
        }
        combo.on_food_eaten();
        assert_eq!(combo.timer(), 1800);
        for _ in 0..1000 {
            combo.tick();
        }
        assert_eq!(combo.count(), 2);
    }
}

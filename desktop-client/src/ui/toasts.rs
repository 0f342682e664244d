const TOAST_SECS: f32 = 3.0;

pub struct Toast {
    pub title: String,
    pub body: String,
    remaining_secs: f32,
}

impl Toast {
    /// 1.0 while fresh, fading to 0.0 over the last second.
    pub fn opacity(&self) -> f32 {
        self.remaining_secs.clamp(0.0, 1.0)
    }
}

#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.items.push(Toast {
            title: title.into(),
            body: body.into(),
            remaining_secs: TOAST_SECS,
        });
    }

    pub fn advance(&mut self, dt_secs: f32) {
        for toast in &mut self.items {
            toast.remaining_secs -= dt_secs;
        }
        self.items.retain(|toast| toast.remaining_secs > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut toasts = Toasts::default();
        toasts.push("Combo Master", "Trigger 10 combos");
        toasts.advance(1.0);
        toasts.push("Power User", "Collect 5 power-ups");
        assert_eq!(toasts.len(), 2);

        toasts.advance(2.5);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().map(|t| t.title.as_str()), Some("Power User"));
        assert!((toasts.iter().next().unwrap().opacity() - 0.5).abs() < 1e-6);

        toasts.advance(1.0);
        assert_eq!(toasts.len(), 0);
    }
}

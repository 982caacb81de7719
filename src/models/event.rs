use sqlx::FromRow;
use uuid::Uuid;

/// Строка из таблицы `events`, нужная для учёта мест.
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub total_spots: Option<i32>,
    // Старое поле, встречается у ранних событий
    pub spots: Option<i32>,
}

impl Event {
    pub fn new(id: Uuid, total_spots: i32) -> Self {
        Self { id, total_spots: Some(total_spots), spots: None }
    }

    /// Объявленная вместимость: `total_spots`, иначе `spots`, иначе 0.
    pub fn declared_capacity(&self) -> i32 {
        self.total_spots.or(self.spots).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_capacity_prefers_total_spots() {
        let event = Event { id: Uuid::new_v4(), total_spots: Some(12), spots: Some(40) };
        assert_eq!(event.declared_capacity(), 12);
    }

    #[test]
    fn declared_capacity_falls_back_to_legacy_spots() {
        let event = Event { id: Uuid::new_v4(), total_spots: None, spots: Some(40) };
        assert_eq!(event.declared_capacity(), 40);

        let event = Event { id: Uuid::new_v4(), total_spots: None, spots: None };
        assert_eq!(event.declared_capacity(), 0);
    }
}

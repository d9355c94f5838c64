use crate::models::Contact;

/// Static contact seed. The directory service that would normally supply
/// this list is an external collaborator; until it exists the client ships
/// with a fixed roster.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "Sofia Davis", "2h"),
        Contact::new(2, "Alex Johnson", "45m"),
        Contact::new(3, "Maria Gonzalez", "1h"),
        Contact::new(4, "Kevin Brown", "3h"),
        Contact::new(5, "Lily White", "30m"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_unique() {
        let contacts = seed_contacts();
        let mut ids: Vec<u32> = contacts.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), contacts.len());
    }
}

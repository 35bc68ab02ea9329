use std::collections::{HashMap, HashSet};

use crate::parser::Student;

/// Result of one matching run
#[derive(Debug, Clone, Default)]
pub struct RoomAssignment {
    pub by_room: HashMap<String, String>, // room id -> student name
    pub unassigned: Vec<String>,          // students that found no free room
}

/// Assigns students to rooms greedily: students are processed in the given
/// order and each takes the first room on its preference list that exists and
/// is still free. Greedy and non-backtracking, so it does not guarantee a
/// maximum matching; deterministic for a fixed student order.
pub fn assign_rooms(students: &[Student], rooms: &[String]) -> RoomAssignment {
    let known_rooms: HashSet<&str> = rooms.iter().map(|r| r.as_str()).collect();
    let mut by_room: HashMap<String, String> = HashMap::new();
    let mut unassigned = Vec::new();

    for student in students {
        let free_room = student
            .preferences
            .iter()
            .find(|room| known_rooms.contains(room.as_str()) && !by_room.contains_key(*room));

        match free_room {
            Some(room) => {
                by_room.insert(room.clone(), student.name.clone());
            }
            None => unassigned.push(student.name.clone()),
        }
    }

    RoomAssignment { by_room, unassigned }
}

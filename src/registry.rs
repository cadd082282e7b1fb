//! The registry under measurement: a two-level keyed store mapping room ids
//! to rooms and, within each room, user ids to append-only input buffers.
//!
//! Two mutation policies coexist on purpose: `join_room` auto-creates missing
//! rooms and users, while `append_user_input` silently drops data for pairs
//! that were never joined. Callers must join before appending if they want
//! the bytes kept.

use std::collections::HashMap;

/// A member of a room, accumulating raw input bytes.
///
/// The buffer only grows; nothing in the registry truncates or reorders it.
#[derive(Debug, Clone)]
pub struct User {
    user_id: u32,
    inputs: Vec<u8>,
}

impl User {
    fn new(user_id: u32) -> Self {
        Self {
            user_id,
            inputs: Vec::new(),
        }
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn inputs(&self) -> &[u8] {
        &self.inputs
    }
}

/// A room holding its members keyed by user id.
#[derive(Debug, Clone)]
pub struct Room {
    room_id: u32,
    users: HashMap<u32, User>,
}

impl Room {
    fn new(room_id: u32) -> Self {
        Self {
            room_id,
            users: HashMap::new(),
        }
    }

    pub fn room_id(&self) -> u32 {
        self.room_id
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Totals produced by [`Registry::aggregate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryTotals {
    pub rooms: usize,
    pub users: usize,
    pub input_bytes: usize,
}

/// The registry: rooms keyed by room id.
///
/// Constructed explicitly and handed to its caller; there is no
/// process-global instance, so every test and benchmark gets isolated state.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rooms: HashMap<u32, Room>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Register `user_id` as a member of `room_id`, creating the room and the
    /// user on first sight. Re-joining an existing pair is a no-op; in
    /// particular the user's buffer is left untouched.
    pub fn join_room(&mut self, room_id: u32, user_id: u32) {
        self.rooms
            .entry(room_id)
            .or_insert_with(|| Room::new(room_id))
            .users
            .entry(user_id)
            .or_insert_with(|| User::new(user_id));
    }

    /// Append `data`, in order, to the buffer of `(room_id, user_id)`.
    ///
    /// Unknown rooms and unknown users drop the data silently — unlike
    /// [`Registry::join_room`], this never creates anything.
    pub fn append_user_input(&mut self, room_id: u32, user_id: u32, data: &[u8]) {
        if let Some(room) = self.rooms.get_mut(&room_id) {
            if let Some(user) = room.users.get_mut(&user_id) {
                user.inputs.extend_from_slice(data);
            }
        }
    }

    /// Read-only reduction over the whole registry: room count, user count
    /// across all rooms, and total buffered bytes. Traversal order does not
    /// affect the result.
    pub fn aggregate(&self) -> RegistryTotals {
        let mut totals = RegistryTotals {
            rooms: self.rooms.len(),
            ..Default::default()
        };
        for room in self.rooms.values() {
            totals.users += room.users.len();
            for user in room.users.values() {
                totals.input_bytes += user.inputs.len();
            }
        }
        totals
    }

    /// Buffer contents for a pair, if both the room and the user exist.
    pub fn user_inputs(&self, room_id: u32, user_id: u32) -> Option<&[u8]> {
        self.rooms
            .get(&room_id)?
            .users
            .get(&user_id)
            .map(|user| user.inputs.as_slice())
    }

    /// Iterate over all rooms.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
}

use chrono::NaiveDate;
use csv::Reader;
use serde::Deserialize;

use crate::error::Result;

/// A snack held by the snack cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snack {
    pub name: String,
    pub quantity: u32,
    pub price: u32,
    pub expiry: NaiveDate,
}

/// A student and their ordered room preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub preferences: Vec<String>,
}

/// One undirected corridor between two campus spots
#[derive(Debug, Clone, Deserialize)]
pub struct CampusEdge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// A booked laundry slot, `[start, end)` in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Slot {
    pub start: u32,
    pub end: u32,
}

/// A mess dish with its rating out of 5
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dish {
    pub name: String,
    pub rating: u32,
}

// All data lives in the binary; every process start reseeds from scratch.
const SNACKS_CSV: &str = "\
name,quantity,price,expiry
Kurkure,10,15,2025-09-01
Lays,5,20,2025-08-10
Oreo,8,25,2025-10-05
";

const STUDENTS_CSV: &str = "\
name,preferences
Alice,A1
Bob,A2
Charlie,A1;A2
Daisy,A2
";

const ROOMS_CSV: &str = "\
id
A1
A2
";

const CAMPUS_CSV: &str = "\
from,to,weight
Gate,Mess,2
Mess,Laundry,1
Gate,Laundry,4
";

const LAUNDRY_CSV: &str = "\
start,end
9,10
10,11
11,12
";

const ENTRY_HOURS_CSV: &str = "\
hour
1
2
2
3
4
4
5
";

const DISHES_CSV: &str = "\
name,rating
Paneer,5
Dal,3
Rice,4
Aloo,2
Chole,4
";

const WEEK_PLAN_CSV: &str = "\
day,dish
Mon,Paneer
Tue,Dal
Wed,Rice
Thu,Aloo
Fri,Chole
";

#[derive(Debug, Deserialize)]
struct SnackRow {
    name: String,
    quantity: u32,
    price: u32,
    expiry: String,
}

#[derive(Debug, Deserialize)]
struct StudentRow {
    name: String,
    preferences: String,
}

/// Splits a `;`-separated preference cell into an ordered room list.
/// Empty cells produce an empty list.
fn parse_preferences(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

fn read_rows<T: for<'de> Deserialize<'de>>(table: &str) -> Result<Vec<T>> {
    let mut reader = Reader::from_reader(table.as_bytes());
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Loads the snack cart seed stock
pub fn seed_snacks() -> Result<Vec<Snack>> {
    let rows: Vec<SnackRow> = read_rows(SNACKS_CSV)?;
    let mut snacks = Vec::with_capacity(rows.len());
    for row in rows {
        snacks.push(Snack {
            name: row.name,
            quantity: row.quantity,
            price: row.price,
            expiry: NaiveDate::parse_from_str(&row.expiry, "%Y-%m-%d")?,
        });
    }
    Ok(snacks)
}

/// Loads the student roster with room preferences
pub fn seed_students() -> Result<Vec<Student>> {
    let rows: Vec<StudentRow> = read_rows(STUDENTS_CSV)?;
    Ok(rows
        .into_iter()
        .map(|row| Student {
            name: row.name,
            preferences: parse_preferences(&row.preferences),
        })
        .collect())
}

/// Loads the room identifiers
pub fn seed_rooms() -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct RoomRow {
        id: String,
    }
    let rows: Vec<RoomRow> = read_rows(ROOMS_CSV)?;
    Ok(rows.into_iter().map(|row| row.id).collect())
}

/// Loads the campus corridor graph edges
pub fn seed_campus_edges() -> Result<Vec<CampusEdge>> {
    read_rows(CAMPUS_CSV)
}

/// Loads the already-booked laundry slots
pub fn seed_laundry_slots() -> Result<Vec<Slot>> {
    read_rows(LAUNDRY_CSV)
}

/// Loads the canteen entry hours, a non-decreasing sequence
pub fn seed_entry_hours() -> Result<Vec<u32>> {
    #[derive(Deserialize)]
    struct HourRow {
        hour: u32,
    }
    let rows: Vec<HourRow> = read_rows(ENTRY_HOURS_CSV)?;
    Ok(rows.into_iter().map(|row| row.hour).collect())
}

/// Loads the mess dishes with ratings
pub fn seed_dishes() -> Result<Vec<Dish>> {
    read_rows(DISHES_CSV)
}

/// Loads the weekday -> dish plan in weekday order
pub fn seed_week_plan() -> Result<Vec<(String, String)>> {
    #[derive(Deserialize)]
    struct PlanRow {
        day: String,
        dish: String,
    }
    let rows: Vec<PlanRow> = read_rows(WEEK_PLAN_CSV)?;
    Ok(rows.into_iter().map(|row| (row.day, row.dish)).collect())
}

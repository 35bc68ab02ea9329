use std::io::{self, BufRead, Write};

use hostel_dada::display;
use hostel_dada::error::Error;
use hostel_dada::hostel::{
    assign_rooms, best_entry, top_rated, window_counts, CampusMap, SlotBoard, SnackCart,
    TaskBoard,
};
use hostel_dada::parser;

/// Window size for the canteen queue prediction, in consecutive entries
const CANTEEN_WINDOW: usize = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Seed every module's state up front; it lives for the whole run.
    let mut cart = SnackCart::new(parser::seed_snacks()?);
    let students = parser::seed_students()?;
    let rooms = parser::seed_rooms()?;
    let campus = CampusMap::from_edges(&parser::seed_campus_edges()?);
    let mut laundry = SlotBoard::new(parser::seed_laundry_slots()?);
    let entry_hours = parser::seed_entry_hours()?;
    let dishes = parser::seed_dishes()?;
    let week_plan = parser::seed_week_plan()?;
    let mut tasks = TaskBoard::new();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\nWelcome to Hostel Dada 👋");
    loop {
        println!("\nChoose an Option:");
        println!("  1. Snack Cart");
        println!("  2. Roomie Matcher");
        println!("  3. Mess Menu");
        println!("  4. Laundry Slots");
        println!("  5. Hostel Fixer");
        println!("  6. Canteen Rush");
        println!("  0. Exit");

        match prompt_number(&mut input, "> ")? {
            0 => break,
            1 => run_snack_cart(&mut input, &mut cart)?,
            2 => display::print_assignments(&rooms, &assign_rooms(&students, &rooms)),
            3 => display::print_mess_menu(&top_rated(&dishes, 3), &week_plan),
            4 => run_laundry(&mut input, &mut laundry)?,
            5 => run_hostel_fixer(&mut input, &mut tasks, &campus)?,
            6 => {
                let reports = window_counts(&entry_hours, CANTEEN_WINDOW);
                let best = best_entry(&entry_hours, CANTEEN_WINDOW);
                display::print_queue_report(CANTEEN_WINDOW, &reports, best);
            }
            other => println!("{}", Error::InvalidChoice(other.to_string())),
        }
    }

    println!("\nThank you for using Hostel Dada!");
    Ok(())
}

/// The snack cart's own sub-menu: view stock, buy, profit report
fn run_snack_cart(input: &mut impl BufRead, cart: &mut SnackCart) -> io::Result<()> {
    println!("\n[Snack Cart]");
    loop {
        println!("\n1. View Stock\n2. Buy Snack\n3. View Profit\n0. Back");
        match prompt_number(input, "> ")? {
            0 => return Ok(()),
            1 => display::print_stock(&cart.rank()),
            2 => {
                let name = prompt_line(input, "Enter snack name: ")?;
                let qty = prompt_number(input, "Enter quantity: ")?;
                match cart.purchase(&name, qty) {
                    Ok(profit) => println!("Purchased! ₹{} added to profit.", profit),
                    Err(e) => println!("{}", e),
                }
            }
            3 => {
                let (history, total) = cart.profit_report();
                display::print_profit_report(&history, total);
            }
            other => println!("{}", Error::InvalidChoice(other.to_string())),
        }
    }
}

/// Shows the booked laundry slots and takes one booking attempt
fn run_laundry(input: &mut impl BufRead, laundry: &mut SlotBoard) -> io::Result<()> {
    println!("\n[Laundry Slots]");
    display::print_slots(laundry.slots());
    let start = prompt_number(input, "Book a slot (start hour): ")?;
    let end = prompt_number(input, "End hour: ")?;
    match laundry.book(start, end) {
        Ok(()) => println!("Slot booked!"),
        Err(e) => println!("{} Choose another slot.", e),
    }
    Ok(())
}

/// Takes one maintenance task, lists the board, then runs the corridor
/// shortest-path demo between the seeded spots
fn run_hostel_fixer(
    input: &mut impl BufRead,
    tasks: &mut TaskBoard,
    campus: &CampusMap,
) -> io::Result<()> {
    println!("\n[Hostel Fixer]");
    let description = prompt_line(input, "Add a maintenance task (desc): ")?;
    let urgency = prompt_number(input, "Urgency (1-10): ")?;
    tasks.add(description, urgency);

    println!();
    display::print_tasks(&tasks.by_urgency());

    println!();
    display::print_path("Gate", "Laundry", campus.shortest_path("Gate", "Laundry"));
    Ok(())
}

/// Prompts until a non-empty line arrives. Err on end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

/// Prompts until a line parses as a number, reprompting on anything
/// malformed. Err on end of input.
fn prompt_number(input: &mut impl BufRead, prompt: &str) -> io::Result<u32> {
    loop {
        let line = prompt_line(input, prompt)?;
        match line.parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Please enter a number."),
        }
    }
}

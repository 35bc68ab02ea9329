use crate::hostel::{RoomAssignment, Sale, Task, WindowReport};
use crate::parser::{Dish, Slot, Snack};

/// Formats a half-open hour slot for display
pub fn format_slot(slot: &Slot) -> String {
    format!("{}:00 to {}:00", slot.start, slot.end)
}

/// Prints the stock, earliest expiry first
pub fn print_stock(ranked: &[&Snack]) {
    println!("> Stock:");
    for snack in ranked {
        println!(
            " - {} x{} ₹{} | Expires: {}",
            snack.name, snack.quantity, snack.price, snack.expiry
        );
    }
}

/// Prints the sales history (profit descending) and the running total
pub fn print_profit_report(history: &[Sale], total: u32) {
    println!("Profit History:");
    for sale in history {
        println!(" - {}: ₹{}", sale.name, sale.profit);
    }
    println!("Total Profit: ₹{}", total);
}

/// Prints every room with its assigned student, then whoever missed out
pub fn print_assignments(rooms: &[String], assignment: &RoomAssignment) {
    println!("Room Assignments:");
    for room in rooms {
        match assignment.by_room.get(room) {
            Some(student) => println!(" - {}: {}", room, student),
            None => println!(" - {}: [Unassigned]", room),
        }
    }
    if !assignment.unassigned.is_empty() {
        println!("Unassigned students ({}):", assignment.unassigned.len());
        for student in &assignment.unassigned {
            println!(" - {}", student);
        }
    }
}

/// Prints a shortest-path result, spelling out unreachable destinations
pub fn print_path(source: &str, destination: &str, distance: Option<u32>) {
    match distance {
        Some(d) => println!("Shortest path from {} to {}: {} units", source, destination, d),
        None => println!("{} is unreachable from {}", destination, source),
    }
}

/// Prints the booked laundry slots in booking order
pub fn print_slots(slots: &[Slot]) {
    println!("Booked slots:");
    for slot in slots {
        println!(" - {}", format_slot(slot));
    }
}

/// Prints the per-window queue counts and the best time to walk in
pub fn print_queue_report(window: usize, reports: &[WindowReport], best: Option<(u32, usize)>) {
    println!("Queue prediction (window of {} entries):", window);
    for report in reports {
        println!(
            " - Hour {} to {}: {} people",
            report.from, report.to, report.count
        );
    }
    match best {
        Some((hour, count)) => {
            println!("Best time to enter: {}:00 ({} people in queue)", hour, count)
        }
        None => println!("Not enough entries to predict a queue."),
    }
}

/// Prints the maintenance tasks, most urgent first
pub fn print_tasks(tasks: &[Task]) {
    println!("Urgent Tasks:");
    for task in tasks {
        println!(" - {} (Urgency: {})", task.description, task.urgency);
    }
}

/// Prints the top-rated dishes and the weekday plan
pub fn print_mess_menu(top: &[Dish], plan: &[(String, String)]) {
    println!("Top Dishes (by rating):");
    for dish in top {
        println!(" - {} ({}/5)", dish.name, dish.rating);
    }
    println!("\nWeek Planner:");
    for (day, dish) in plan {
        println!(" - {}: {}", day, dish);
    }
}

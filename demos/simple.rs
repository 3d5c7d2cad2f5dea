use driver_arrangement::{arrange, MatchError};

fn main() -> Result<(), MatchError> {
    let drivers = ["aaaa", "abca", "efgh"];
    let destinations = ["aaaa", "bbb"];

    let result = arrange(&drivers, &destinations)?;
    println!("total: {:?}", result.total_score);
    for (driver, destination) in result.pairs() {
        println!("{driver} -> {destination}");
    }
    Ok(())
}

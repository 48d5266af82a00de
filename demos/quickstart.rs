use lightdate::{date_difference, BrokenDownTime, Date, Month};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let today = Date::today()?;
    let new_year = Date::new(today.year() + 1, Month::January, 1)?;

    println!("Today: {today} ({:?})", today.weekday());
    println!("JD at midnight: {}", today.julian_day());
    println!("Days until {new_year}: {}", date_difference(&today, &new_year));
    println!("As struct tm: {:?}", BrokenDownTime::from(today));
    Ok(())
}

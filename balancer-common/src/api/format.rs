/// `30000` -> `"30,000"`
pub fn format_rating(rating: u32) -> String
{
    group_thousands(&rating.to_string())
}

/// One decimal place with thousands separators, a trailing `.0` is dropped
pub fn format_average(average: f64) -> String
{
    let tenths = (average.max(0.0) * 10.0).round() as u64;
    let whole = group_thousands(&(tenths / 10).to_string());

    match tenths % 10
    {
        0 => whole,
        fraction => format!("{}.{}", whole, fraction),
    }
}

fn group_thousands(digits: &str) -> String
{
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate()
    {
        if index > 0 && (digits.len() - index) % 3 == 0
        {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

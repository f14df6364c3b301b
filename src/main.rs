use log::debug;
use wordcalc::evaluate_expression;

const SAMPLE_EXPRESSIONS: [&str; 7] = [
    "19+19",
    "(1 + (2 + (3 + (4 + (5 + (6 + (7 + (8 + (9 + (10))))))))))",
    "six plus three",
    "Can you tell me 2 + 3?",
    "5 multiplied by 10 multiplied by 2",
    "12 plus (10 divided by 2)",
    "3 divided by (2 plus 1)",
];

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let expressions: Vec<&str> = if args.is_empty() {
        SAMPLE_EXPRESSIONS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    debug!("Evaluating {} expressions", expressions.len());

    for expression in expressions {
        match evaluate_expression(expression) {
            Ok(result) => {
                println!("Expression: {}", expression);
                println!("Result: {:?}", result);
            }
            Err(err) => println!("Error in expression '{}': {}", expression, err),
        }
        println!("---");
    }
}

use curlcmd::curl::parse;

fn main() {
    let curl_command = "curl 'http://example.com/' -H 'Accept: application/json' -L";
    let result = parse(curl_command);
    println!("{result:#?}");

    if let Ok(request) = result {
        println!("{request}");
    }
}

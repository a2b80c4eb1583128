use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use tracing::warn;

use crate::{
    error::{Error, Result},
    graphs::{
        graph_factory::{parse_number, GraphFactory},
        incidence_list::IncidenceList,
        Graph, Vertex, MAX_VERTEX_COUNT, MAX_WEIGHT, MIN_VERTEX_COUNT, MIN_WEIGHT,
    },
    report::write_outcome_to_file,
    search::path::{ShortestPathOutcome, ShortestPathRequest},
    utility::has_txt_extension,
};

/// Ends the neighbor list of a vertex.
pub const END_OF_LIST: &str = "-";

/// Where the graph is read from or the result is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medium {
    Console,
    File,
}

/// Interactive prompts over any line source.
///
/// Every read re-prompts until the entered line is valid and only fails
/// when the input ends or the output can not be written.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleSession { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads an integer in `min..=max` without leading zeros.
    pub fn read_number(&mut self, what: &'static str, min: u32, max: u32) -> Result<u32> {
        loop {
            let line = self.read_line(what)?;
            if let Some(number) = parse_in_range(&line, min, max) {
                return Ok(number);
            }
            self.report_invalid()?;
        }
    }

    pub fn read_medium(&mut self, title: &str, console: &str, file: &str) -> Result<Medium> {
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "1. {}", console)?;
        writeln!(self.output, "2. {}", file)?;
        writeln!(self.output, "Enter a value from 1 to 2:")?;
        match self.read_number("a menu choice", 1, 2)? {
            1 => Ok(Medium::Console),
            _ => Ok(Medium::File),
        }
    }

    /// Asks for the number of vertices and then for the neighbors of each
    /// vertex. Self-loops and duplicates are reported and skipped.
    pub fn read_incidence_list(&mut self) -> Result<IncidenceList> {
        writeln!(
            self.output,
            "Enter the number of vertices ({} to {}):",
            MIN_VERTEX_COUNT, MAX_VERTEX_COUNT
        )?;
        let vertex_count =
            self.read_number("the number of vertices", MIN_VERTEX_COUNT, MAX_VERTEX_COUNT)?;

        let mut incidence_list = IncidenceList::new(vertex_count);
        for vertex in 1..=vertex_count {
            writeln!(
                self.output,
                "Enter the vertices connected to vertex {} (no self-references or duplicates), enter '{}' to finish:",
                vertex, END_OF_LIST
            )?;
            while let Some(neighbor) = self.read_neighbor(vertex_count)? {
                if let Err(reason) = incidence_list.insert(vertex, neighbor) {
                    warn!(vertex, neighbor, %reason, "skipping neighbor");
                    writeln!(self.output, "Error: {}. Skipping vertex {}.", reason, neighbor)?;
                }
            }
        }

        Ok(incidence_list)
    }

    /// Reads the incidence list and then one weight per edge.
    pub fn read_graph(&mut self) -> Result<Graph> {
        let incidence_list = self.read_incidence_list()?;
        GraphFactory::from_incidence_list(incidence_list, |tail, head| {
            writeln!(
                self.output,
                "Enter the length of the road from city {} to city {} ({} to {}):",
                tail, head, MIN_WEIGHT, MAX_WEIGHT
            )?;
            self.read_number("an edge weight", MIN_WEIGHT, MAX_WEIGHT)
        })
    }

    /// Asks for graph file paths until one holds a valid graph.
    pub fn read_graph_from_file(&mut self) -> Result<Graph> {
        writeln!(self.output, "The file must contain:")?;
        writeln!(
            self.output,
            "- the number of vertices ({} to {}) on the first line,",
            MIN_VERTEX_COUNT, MAX_VERTEX_COUNT
        )?;
        writeln!(
            self.output,
            "- then one line per vertex with space separated (vertex weight) pairs."
        )?;
        writeln!(self.output, "Example:\n3\n2 10 3 5\n1 10\n1 5\n")?;

        loop {
            let path = self.read_txt_path("a graph file path")?;
            match GraphFactory::from_file(&path) {
                Ok(graph) => return Ok(graph),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    pub fn read_request(&mut self, graph: &Graph) -> Result<ShortestPathRequest> {
        let number_of_vertices = graph.number_of_vertices();
        writeln!(self.output, "Enter the departure city:")?;
        let source = self.read_number("the departure city", 1, number_of_vertices)?;
        writeln!(self.output, "Enter the arrival city:")?;
        let target = self.read_number("the arrival city", 1, number_of_vertices)?;

        ShortestPathRequest::new(graph, source, target).ok_or_else(|| {
            Error::InvalidInput(format!("no such cities: {} and {}", source, target))
        })
    }

    /// Asks for output paths until the outcome was written to one of them.
    pub fn write_outcome_to_chosen_file(&mut self, outcome: &ShortestPathOutcome) -> Result<()> {
        writeln!(self.output, "Enter the path of the output file.")?;
        writeln!(
            self.output,
            "A missing file is created at the given path or in the working directory."
        )?;

        loop {
            let path = self.read_txt_path("an output file path")?;
            match write_outcome_to_file(&path, outcome) {
                Ok(()) => break,
                Err(err) => writeln!(self.output, "Unable to write the file: {}", err)?,
            }
        }
        writeln!(self.output, "Writing data... done!")?;
        Ok(())
    }

    fn read_neighbor(&mut self, vertex_count: u32) -> Result<Option<Vertex>> {
        loop {
            let line = self.read_line("a neighbor list")?;
            if line == END_OF_LIST {
                return Ok(None);
            }
            if let Some(neighbor) = parse_in_range(&line, 1, vertex_count) {
                return Ok(Some(neighbor));
            }
            self.report_invalid()?;
        }
    }

    fn read_txt_path(&mut self, what: &'static str) -> Result<PathBuf> {
        loop {
            write!(self.output, "Enter the file path with its extension: ")?;
            self.output.flush()?;
            let path = PathBuf::from(self.read_line(what)?);
            if has_txt_extension(&path) {
                return Ok(path);
            }
            writeln!(self.output, "Wrong file type. Only .txt files are allowed.")?;
        }
    }

    fn read_line(&mut self, what: &'static str) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEndOfInput(what));
        }
        Ok(line.trim().to_string())
    }

    fn report_invalid(&mut self) -> Result<()> {
        writeln!(self.output, "You entered invalid data! Try again:")?;
        Ok(())
    }
}

fn parse_in_range(line: &str, min: u32, max: u32) -> Option<u32> {
    parse_number(line, 0)
        .ok()
        .filter(|number| (min..=max).contains(number))
}
